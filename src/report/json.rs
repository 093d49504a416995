use serde::Serialize;

use crate::panels::PanelSpec;
use crate::pipeline::RankScope;
use crate::report::SummaryData;

#[derive(Debug, Serialize)]
struct DashboardDocument<'a> {
    tool: ToolMeta<'a>,
    input: InputMeta<'a>,
    panels: &'a [PanelSpec],
}

#[derive(Debug, Serialize)]
struct ToolMeta<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct InputMeta<'a> {
    source: &'a str,
    n_companies: usize,
    n_filtered: usize,
    countries_selected: usize,
    countries_total: usize,
    industries_selected: usize,
    industries_total: usize,
    top_n: usize,
    rank_scope: RankScope,
}

/// Pretty-printed dashboard document. Non-finite numbers serialize as `null`.
pub fn render_dashboard_json(
    summary: &SummaryData,
    panels: &[PanelSpec],
) -> Result<String, serde_json::Error> {
    let doc = DashboardDocument {
        tool: ToolMeta {
            name: &summary.tool_name,
            version: &summary.tool_version,
        },
        input: InputMeta {
            source: &summary.source,
            n_companies: summary.n_companies,
            n_filtered: summary.n_filtered,
            countries_selected: summary.n_countries_selected,
            countries_total: summary.n_countries_total,
            industries_selected: summary.n_industries_selected,
            industries_total: summary.n_industries_total,
            top_n: summary.top_n,
            rank_scope: summary.rank_scope,
        },
        panels,
    };
    serde_json::to_string_pretty(&doc)
}
