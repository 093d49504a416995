use std::cmp::Ordering;
use std::collections::HashMap;

use crate::model::metrics::{Dimension, Metric};
use crate::model::record::CompanyRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupMean {
    pub group: String,
    pub mean: f64,
    pub members: usize,
}

/// Descending order over f64 where every non-finite value (NaN, +inf, -inf)
/// ranks after all finite values and compares equal to other non-finite values.
pub fn descending_finite_first(a: f64, b: f64) -> Ordering {
    match (a.is_finite(), b.is_finite()) {
        (true, true) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

/// First `n` records by `metric`, largest first. Ties keep input order.
pub fn top_n<'a>(records: &[&'a CompanyRecord], metric: Metric, n: usize) -> Vec<&'a CompanyRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| descending_finite_first(metric.value(a), metric.value(b)));
    sorted.truncate(n);
    sorted
}

/// Member count per distinct value of `dimension`, largest first. Ties keep
/// first-seen order.
pub fn category_counts(records: &[&CompanyRecord], dimension: Dimension) -> Vec<CategoryCount> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();
    for record in records {
        let value = dimension.value(record);
        match slots.get(value) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                slots.insert(value, counts.len());
                counts.push(CategoryCount {
                    value: value.to_string(),
                    count: 1,
                });
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

pub fn top_categories(records: &[&CompanyRecord], dimension: Dimension, n: usize) -> Vec<CategoryCount> {
    let mut counts = category_counts(records, dimension);
    counts.truncate(n);
    counts
}

/// Mean of `metric` per distinct value of `group`, in first-seen group order.
///
/// NaN values are treated as missing and skipped; infinities take part in
/// the mean. A group whose values are all missing has a NaN mean.
pub fn group_means(records: &[&CompanyRecord], group: Dimension, metric: Metric) -> Vec<GroupMean> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut acc: Vec<(String, f64, usize, usize)> = Vec::new();
    for record in records {
        let key = group.value(record);
        let slot = match slots.get(key) {
            Some(&slot) => slot,
            None => {
                slots.insert(key, acc.len());
                acc.push((key.to_string(), 0.0, 0, 0));
                acc.len() - 1
            }
        };
        let entry = &mut acc[slot];
        entry.3 += 1;
        let value = metric.value(record);
        if value.is_nan() {
            continue;
        }
        entry.1 += value;
        entry.2 += 1;
    }

    acc.into_iter()
        .map(|(group, sum, counted, members)| GroupMean {
            group,
            mean: if counted == 0 {
                f64::NAN
            } else {
                sum / counted as f64
            },
            members,
        })
        .collect()
}

/// First `n` groups by mean `metric`, largest first.
pub fn top_group_means(
    records: &[&CompanyRecord],
    group: Dimension,
    metric: Metric,
    n: usize,
) -> Vec<GroupMean> {
    let mut means = group_means(records, group, metric);
    means.sort_by(|a, b| descending_finite_first(a.mean, b.mean));
    means.truncate(n);
    means
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_rank.rs"]
mod tests;
