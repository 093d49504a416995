use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::input::Dataset;
use crate::model::record::CompanyRecord;
use crate::model::selection::FilterSelection;
use crate::panels::{ChartSpec, PanelSpec};
use crate::pipeline::stage5_present::{COUNT_FIELD, TABLE_COLUMNS};
use crate::pipeline::{DerivedView, Views};
use crate::report::json::render_dashboard_json;
use crate::report::text::render_report_text;
use crate::report::{CorrelationPair, Leader, SummaryData, count_non_finite, format_f64};

pub const TABLE_FILE: &str = "filtered_companies.tsv";
pub const DASHBOARD_FILE: &str = "dashboard.json";
pub const REPORT_FILE: &str = "report.txt";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write table: {0}")]
    Csv(#[from] csv::Error),
    #[error("cannot serialize dashboard: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub dataset: &'a Dataset,
    pub selection: &'a FilterSelection,
    pub views: &'a Views<'a>,
    pub panels: &'a [PanelSpec],
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &ReportInput<'_>, out_dir: &Path) -> Result<SummaryData, ReportError> {
    fs::create_dir_all(out_dir).map_err(|source| ReportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let table_path = out_dir.join(TABLE_FILE);
    write_table_tsv(&input.views.filtered, &table_path)?;

    let summary = build_summary(input);

    let dashboard_path = out_dir.join(DASHBOARD_FILE);
    let json = render_dashboard_json(&summary, input.panels)?;
    write_text(&dashboard_path, &json)?;

    let report_path = out_dir.join(REPORT_FILE);
    write_text(&report_path, &render_report_text(&summary))?;

    tracing::info!(
        out_dir = %out_dir.display(),
        rows = input.views.filtered.len(),
        panels = input.panels.len(),
        "wrote reports"
    );
    Ok(summary)
}

pub fn write_table_tsv(records: &[&CompanyRecord], path: &Path) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut w = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(BufWriter::new(file));
    w.write_record(TABLE_COLUMNS)?;
    for r in records {
        w.write_record([
            r.company.clone(),
            r.country.clone(),
            r.industry.clone(),
            format_f64(r.sales),
            format_f64(r.profits),
            format_f64(r.assets),
            format_f64(r.market_value),
            format_f64(r.roa),
            format_f64(r.profit_margin),
        ])?;
    }
    w.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

pub fn build_summary(input: &ReportInput<'_>) -> SummaryData {
    let views = input.views;
    let selection = views.company_selection();

    SummaryData {
        tool_name: input.tool_name.clone(),
        tool_version: input.tool_version.clone(),
        source: input.dataset.source.display().to_string(),

        n_companies: input.dataset.len(),
        n_filtered: views.filtered.len(),
        n_countries_selected: input.selection.countries.len(),
        n_countries_total: input.dataset.countries.len(),
        n_industries_selected: input.selection.industries.len(),
        n_industries_total: input.dataset.industries.len(),

        top_n: views.params.top_n,
        rank_scope: views.params.rank_scope,

        requested_company: selection.and_then(|s| s.requested.clone()),
        selected_company: selection.map(|s| s.record.company.clone()),
        company_fell_back: selection.is_some_and(|s| s.fell_back),
        company_kpis: company_cards(input.panels),

        leaders: leaders(input.panels),
        strongest_correlation: strongest_correlation(views),

        non_finite_roa: count_non_finite(input.dataset.records.iter().map(|r| r.roa)),
        non_finite_profit_margin: count_non_finite(
            input.dataset.records.iter().map(|r| r.profit_margin),
        ),
    }
}

fn company_cards(panels: &[PanelSpec]) -> Vec<(&'static str, f64)> {
    panels
        .iter()
        .find_map(|p| match &p.chart {
            ChartSpec::Metrics(m) => Some(m.cards.iter().map(|c| (c.label, c.value)).collect()),
            _ => None,
        })
        .unwrap_or_default()
}

fn leaders(panels: &[PanelSpec]) -> Vec<Leader> {
    let mut out = Vec::new();
    for panel in panels {
        let ChartSpec::Bar(bar) = &panel.chart else {
            continue;
        };
        if let Some(first) = bar.bars.first() {
            out.push(Leader {
                title: panel.title.clone(),
                category: first.category.clone(),
                value: first.value,
                is_count: bar.value_axis.field == COUNT_FIELD,
            });
        }
    }
    out
}

fn strongest_correlation(views: &Views<'_>) -> Option<CorrelationPair> {
    let matrix = views.panels.iter().find_map(|(_, view)| match view {
        DerivedView::Correlation(m) => Some(m),
        _ => None,
    })?;

    let mut best: Option<CorrelationPair> = None;
    for (i, &a) in matrix.metrics.iter().enumerate() {
        for &b in &matrix.metrics[i + 1..] {
            let Some(r) = matrix.get(a, b).filter(|r| r.is_finite()) else {
                continue;
            };
            if best.as_ref().is_none_or(|best| r.abs() > best.r.abs()) {
                best = Some(CorrelationPair {
                    a: a.column(),
                    b: b.column(),
                    r,
                });
            }
        }
    }
    best
}

fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(io_err)?);
    w.write_all(contents.as_bytes()).map_err(io_err)?;
    w.flush().map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
