use std::collections::HashSet;

use thiserror::Error;

use crate::model::metrics::Metric;
use crate::model::record::CompanyRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("company {company:?} is not in the filtered set")]
    CompanyNotInView { company: String },
}

/// Outcome of resolving the company picker against the filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanySelection<'a> {
    pub requested: Option<String>,
    pub record: &'a CompanyRecord,
    pub fell_back: bool,
}

/// Distinct company names in first-seen order; the picker's domain.
pub fn company_options<'a>(records: &[&'a CompanyRecord]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for record in records {
        let name = record.company.as_str();
        if seen.insert(name) {
            out.push(name);
        }
    }
    out
}

/// First record whose company equals `name`.
pub fn lookup_company<'a>(
    records: &[&'a CompanyRecord],
    name: &str,
) -> Result<&'a CompanyRecord, SelectionError> {
    records
        .iter()
        .copied()
        .find(|r| r.company == name)
        .ok_or_else(|| SelectionError::CompanyNotInView {
            company: name.to_string(),
        })
}

/// Resolves the picked company, falling back to the first filtered company
/// when nothing was picked or the pick is no longer available. `None` only
/// when the filtered set is empty.
pub fn resolve_company<'a>(
    records: &[&'a CompanyRecord],
    requested: Option<&str>,
) -> Option<CompanySelection<'a>> {
    let requested_owned = requested.map(str::to_string);

    if let Some(name) = requested {
        match lookup_company(records, name) {
            Ok(record) => {
                return Some(CompanySelection {
                    requested: requested_owned,
                    record,
                    fell_back: false,
                });
            }
            Err(err) => {
                tracing::warn!(%err, "falling back to the first available company");
            }
        }
    }

    let Some(first) = records.first().copied() else {
        if requested.is_some() {
            tracing::warn!("filtered set is empty; no company selected");
        }
        return None;
    };
    Some(CompanySelection {
        requested: requested_owned,
        record: first,
        fell_back: requested.is_some(),
    })
}

/// `(metric, value)` pairs for a company's KPI block.
pub fn company_kpis(record: &CompanyRecord, metrics: &[Metric]) -> Vec<(Metric, f64)> {
    metrics.iter().map(|m| (*m, m.value(record))).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_lookup.rs"]
mod tests;
