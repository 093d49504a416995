pub mod stage1_filter;
pub mod stage2_rank;
pub mod stage3_correlate;
pub mod stage4_lookup;
pub mod stage5_present;
pub mod stage6_report;

use crate::input::Dataset;
use crate::model::record::CompanyRecord;
use crate::model::selection::FilterSelection;
use crate::panels::defs::{CategoryLimit, PanelDef, PanelKind, PanelSource, builtin_panels};

use stage1_filter::filter_records;
use stage2_rank::{CategoryCount, GroupMean, category_counts, top_categories, top_group_means, top_n};
use stage3_correlate::{CorrelationMatrix, correlation_matrix};
use stage4_lookup::{CompanySelection, company_options, resolve_company};

pub const DEFAULT_TOP_N: usize = 10;

/// Record set feeding the ranking and aggregation panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankScope {
    /// Whole dataset regardless of the filter.
    Full,
    /// Current filter result.
    Filtered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewParams {
    pub top_n: usize,
    pub rank_scope: RankScope,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            rank_scope: RankScope::Full,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DerivedView<'a> {
    Records(Vec<&'a CompanyRecord>),
    Company {
        options: Vec<&'a str>,
        selection: Option<CompanySelection<'a>>,
    },
    Correlation(CorrelationMatrix),
    Counts(Vec<CategoryCount>),
    Ranked(Vec<&'a CompanyRecord>),
    GroupMeans(Vec<GroupMean>),
}

/// Every panel's data for one (dataset, selection, company) input.
#[derive(Debug, Clone)]
pub struct Views<'a> {
    pub filtered: Vec<&'a CompanyRecord>,
    pub params: ViewParams,
    pub panels: Vec<(&'static PanelDef, DerivedView<'a>)>,
}

impl<'a> Views<'a> {
    pub fn panel(&self, id: &str) -> Option<&DerivedView<'a>> {
        self.panels
            .iter()
            .find(|(def, _)| def.id == id)
            .map(|(_, view)| view)
    }

    pub fn company_selection(&self) -> Option<&CompanySelection<'a>> {
        let kpi = builtin_panels()
            .iter()
            .find(|def| matches!(def.kind, PanelKind::CompanyKpi { .. }))?;
        match self.panel(kpi.id)? {
            DerivedView::Company { selection, .. } => selection.as_ref(),
            _ => None,
        }
    }
}

/// Recomputes every view from the current inputs. Holds no state between
/// calls; the dataset is only borrowed.
pub fn compute_views<'a>(
    dataset: &'a Dataset,
    selection: &FilterSelection,
    company: Option<&str>,
    params: &ViewParams,
) -> Views<'a> {
    let full = dataset.records.iter().collect::<Vec<_>>();
    let filtered = filter_records(&dataset.records, selection);
    let ranked_source = match params.rank_scope {
        RankScope::Full => &full,
        RankScope::Filtered => &filtered,
    };

    let mut panels = Vec::with_capacity(builtin_panels().len());
    for def in builtin_panels() {
        let records = match def.source {
            PanelSource::Filtered => &filtered,
            PanelSource::Full => &full,
            PanelSource::RankScope => ranked_source,
        };
        let view = derive_view(def, records, company, params);
        panels.push((def, view));
    }

    tracing::info!(
        total = dataset.len(),
        filtered = filtered.len(),
        rank_scope = ?params.rank_scope,
        panels = panels.len(),
        "computed views"
    );

    Views {
        filtered,
        params: *params,
        panels,
    }
}

fn derive_view<'a>(
    def: &PanelDef,
    records: &[&'a CompanyRecord],
    company: Option<&str>,
    params: &ViewParams,
) -> DerivedView<'a> {
    match def.kind {
        PanelKind::Table | PanelKind::Scatter { .. } => DerivedView::Records(records.to_vec()),
        PanelKind::CompanyKpi { .. } => DerivedView::Company {
            options: company_options(records),
            selection: resolve_company(records, company),
        },
        PanelKind::Correlation { metrics, .. } => {
            DerivedView::Correlation(correlation_matrix(records, metrics))
        }
        PanelKind::CategoryCount {
            dimension, limit, ..
        } => DerivedView::Counts(match limit {
            CategoryLimit::All => category_counts(records, dimension),
            CategoryLimit::TopN => top_categories(records, dimension, params.top_n),
        }),
        PanelKind::TopByMetric { metric, .. } => {
            DerivedView::Ranked(top_n(records, metric, params.top_n))
        }
        PanelKind::GroupMean { group, metric, .. } => {
            DerivedView::GroupMeans(top_group_means(records, group, metric, params.top_n))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/views.rs"]
mod tests;
