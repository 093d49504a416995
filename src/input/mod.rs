use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub mod cache;
pub mod columns;

use cache::open_maybe_gz;
use columns::{ColumnIndex, NumericColumn};

use crate::model::record::CompanyRecord;

/// Immutable, ordered company table. Built once per process and shared.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub source: PathBuf,
    pub records: Vec<CompanyRecord>,
    /// Distinct countries in first-seen order.
    pub countries: Vec<String>,
    /// Distinct industries in first-seen order.
    pub industries: Vec<String>,
}

impl Dataset {
    pub fn from_records(source: PathBuf, records: Vec<CompanyRecord>) -> Self {
        let countries = distinct_in_order(records.iter().map(|r| r.country.as_str()));
        let industries = distinct_in_order(records.iter().map(|r| r.industry.as_str()));
        Self {
            source,
            records,
            countries,
            industries,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("parse error: line {line}, column {column}: cannot read {value:?} as a number")]
    Parse {
        line: u64,
        column: &'static str,
        value: String,
    },
}

pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    if !path.exists() {
        return Err(LoadError::MissingInput(format!(
            "{} does not exist",
            path.display()
        )));
    }

    let reader = open_maybe_gz(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers)?;
    tracing::debug!(columns = headers.len(), "resolved CSV header");

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let text = |idx: usize| row.get(idx).unwrap_or("").to_string();
        let number = |column: NumericColumn| parse_numeric(row.get(columns.numeric(column)), line, column);

        records.push(CompanyRecord::new(
            text(columns.company),
            text(columns.country),
            text(columns.industry),
            number(NumericColumn::Sales)?,
            number(NumericColumn::Profits)?,
            number(NumericColumn::Assets)?,
            number(NumericColumn::MarketValue)?,
        ));
    }

    let dataset = Dataset::from_records(path.to_path_buf(), records);
    if dataset.is_empty() {
        tracing::warn!(path = %path.display(), "input has a header but no rows");
    }
    tracing::info!(
        path = %path.display(),
        companies = dataset.len(),
        countries = dataset.countries.len(),
        industries = dataset.industries.len(),
        "loaded dataset"
    );
    Ok(dataset)
}

fn parse_numeric(raw: Option<&str>, line: u64, column: NumericColumn) -> Result<f64, LoadError> {
    let raw = raw.unwrap_or("").trim();
    if raw.is_empty() {
        tracing::warn!(line, column = column.name(), "empty numeric cell; reading as missing");
        return Ok(f64::NAN);
    }
    raw.parse::<f64>().map_err(|_| LoadError::Parse {
        line,
        column: column.name(),
        value: raw.to_string(),
    })
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
