pub mod json;
pub mod text;

use crate::pipeline::RankScope;

/// Leading entry of one ranking panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Leader {
    pub title: String,
    pub category: String,
    pub value: f64,
    /// Value is a member count rather than a metric.
    pub is_count: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationPair {
    pub a: &'static str,
    pub b: &'static str,
    pub r: f64,
}

#[derive(Debug, Clone)]
pub struct SummaryData {
    pub tool_name: String,
    pub tool_version: String,
    pub source: String,

    pub n_companies: usize,
    pub n_filtered: usize,
    pub n_countries_selected: usize,
    pub n_countries_total: usize,
    pub n_industries_selected: usize,
    pub n_industries_total: usize,

    pub top_n: usize,
    pub rank_scope: RankScope,

    pub requested_company: Option<String>,
    pub selected_company: Option<String>,
    pub company_fell_back: bool,
    pub company_kpis: Vec<(&'static str, f64)>,

    pub leaders: Vec<Leader>,
    pub strongest_correlation: Option<CorrelationPair>,

    pub non_finite_roa: usize,
    pub non_finite_profit_margin: usize,
}

/// Shortest representation that reads back to the same value; non-finite
/// values print as `NaN`, `inf` or `-inf`.
pub fn format_f64(v: f64) -> String {
    format!("{}", v)
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn count_non_finite(values: impl IntoIterator<Item = f64>) -> usize {
    values.into_iter().filter(|v| !v.is_finite()).count()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
