use crate::model::record::CompanyRecord;
use crate::model::selection::FilterSelection;

/// Keeps records whose country and industry are both selected, in input order.
///
/// Accepts the full dataset or an already filtered view, so filtering a
/// filtered view with the same selection returns it unchanged.
pub fn filter_records<'a, I>(records: I, selection: &FilterSelection) -> Vec<&'a CompanyRecord>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    let mut out = Vec::new();
    let mut seen = 0usize;
    for record in records {
        seen += 1;
        if selection.matches(record) {
            out.push(record);
        }
    }
    tracing::debug!(
        seen,
        kept = out.len(),
        countries = selection.countries.len(),
        industries = selection.industries.len(),
        "applied filter selection"
    );
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_filter.rs"]
mod tests;
