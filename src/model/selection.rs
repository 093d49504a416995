use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::input::Dataset;
use crate::model::record::CompanyRecord;

/// Country and industry sets a record must belong to. Both default to every
/// value observed in the dataset; an empty set matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub countries: BTreeSet<String>,
    pub industries: BTreeSet<String>,
}

impl FilterSelection {
    pub fn all(dataset: &Dataset) -> Self {
        Self {
            countries: dataset.countries.iter().cloned().collect(),
            industries: dataset.industries.iter().cloned().collect(),
        }
    }

    /// `None` for a dimension means "all observed values".
    pub fn from_parts(
        dataset: &Dataset,
        countries: Option<Vec<String>>,
        industries: Option<Vec<String>>,
    ) -> Self {
        let all = Self::all(dataset);
        let selection = Self {
            countries: countries.map_or(all.countries, |v| v.into_iter().collect()),
            industries: industries.map_or(all.industries, |v| v.into_iter().collect()),
        };
        selection.warn_unobserved(dataset);
        selection
    }

    pub fn matches(&self, record: &CompanyRecord) -> bool {
        self.countries.contains(&record.country) && self.industries.contains(&record.industry)
    }

    fn warn_unobserved(&self, dataset: &Dataset) {
        for country in &self.countries {
            if !dataset.countries.iter().any(|c| c == country) {
                tracing::warn!(country = %country, "selected country never occurs in the dataset");
            }
        }
        for industry in &self.industries {
            if !dataset.industries.iter().any(|i| i == industry) {
                tracing::warn!(industry = %industry, "selected industry never occurs in the dataset");
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum SelectionFileError {
    #[error("cannot read selection file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid selection file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk selection document. A missing key means "all", an explicit empty
/// list means "none".
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SelectionFile {
    #[serde(default)]
    pub countries: Option<Vec<String>>,
    #[serde(default)]
    pub industries: Option<Vec<String>>,
    #[serde(default)]
    pub company: Option<String>,
}

impl SelectionFile {
    pub fn read(path: &Path) -> Result<Self, SelectionFileError> {
        let text = std::fs::read_to_string(path).map_err(|source| SelectionFileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SelectionFileError::Json {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/selection.rs"]
mod tests;
