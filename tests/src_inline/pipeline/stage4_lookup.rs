use super::*;
use crate::fixtures::{record, sample_dataset};
use crate::model::metrics::BASE_METRICS;

#[test]
fn test_company_options_distinct_in_order() {
    let rows = vec![
        record("Beta", "US", "Tech", 1.0, 1.0, 1.0, 1.0),
        record("Alpha", "US", "Tech", 2.0, 1.0, 1.0, 1.0),
        record("Beta", "UK", "Tech", 3.0, 1.0, 1.0, 1.0),
    ];
    let refs = rows.iter().collect::<Vec<_>>();
    assert_eq!(company_options(&refs), vec!["Beta", "Alpha"]);
}

#[test]
fn test_lookup_returns_first_match() {
    let rows = vec![
        record("Beta", "US", "Tech", 1.0, 1.0, 1.0, 1.0),
        record("Beta", "UK", "Tech", 3.0, 1.0, 1.0, 1.0),
    ];
    let refs = rows.iter().collect::<Vec<_>>();
    let found = lookup_company(&refs, "Beta").unwrap();
    assert_eq!(found.country, "US");
}

#[test]
fn test_lookup_missing_company() {
    let dataset = sample_dataset();
    let refs = dataset.records.iter().collect::<Vec<_>>();
    assert_eq!(
        lookup_company(&refs, "Nokia"),
        Err(SelectionError::CompanyNotInView {
            company: "Nokia".to_string()
        })
    );
}

#[test]
fn test_resolve_requested_company() {
    let dataset = sample_dataset();
    let refs = dataset.records.iter().collect::<Vec<_>>();
    let selection = resolve_company(&refs, Some("Shell")).unwrap();
    assert_eq!(selection.record.company, "Shell");
    assert!(!selection.fell_back);
    assert_eq!(selection.requested.as_deref(), Some("Shell"));
}

#[test]
fn test_resolve_falls_back_to_first_company() {
    let dataset = sample_dataset();
    let refs = dataset
        .records
        .iter()
        .filter(|r| r.country == "Japan")
        .collect::<Vec<_>>();
    let selection = resolve_company(&refs, Some("Apple")).unwrap();
    assert_eq!(selection.record.company, "Toyota Motor");
    assert!(selection.fell_back);
    assert_eq!(selection.requested.as_deref(), Some("Apple"));
}

#[test]
fn test_resolve_without_request_picks_first() {
    let dataset = sample_dataset();
    let refs = dataset.records.iter().collect::<Vec<_>>();
    let selection = resolve_company(&refs, None).unwrap();
    assert_eq!(selection.record.company, "Apple");
    assert!(!selection.fell_back);
    assert_eq!(selection.requested, None);
}

#[test]
fn test_resolve_on_empty_view() {
    assert_eq!(resolve_company(&[], Some("Apple")), None);
    assert_eq!(resolve_company(&[], None), None);
}

#[test]
fn test_company_kpis() {
    let dataset = sample_dataset();
    let kpis = company_kpis(&dataset.records[3], &BASE_METRICS);
    assert_eq!(
        kpis,
        vec![
            (Metric::Sales, 400.4),
            (Metric::Profits, 105.4),
            (Metric::Assets, 576.0),
            (Metric::MarketValue, 2292.1),
        ]
    );
}
