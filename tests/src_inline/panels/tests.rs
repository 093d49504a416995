use std::collections::BTreeSet;

use super::defs::{CategoryLimit, PanelKind, PanelSource, builtin_panels};
use super::*;

#[test]
fn test_builtin_catalogue() {
    let defs = builtin_panels();
    assert_eq!(defs.len(), 13);
    assert_eq!(defs[0].id, "filtered_table");
    assert_eq!(defs[12].id, "top_profit_margin_industries");

    let ids = defs.iter().map(|d| d.id).collect::<BTreeSet<_>>();
    assert_eq!(ids.len(), defs.len());
}

#[test]
fn test_sources() {
    for def in builtin_panels() {
        match def.kind {
            PanelKind::Table | PanelKind::Scatter { .. } | PanelKind::CompanyKpi { .. } => {
                assert_eq!(def.source, PanelSource::Filtered, "{}", def.id)
            }
            PanelKind::Correlation { .. } => assert_eq!(def.source, PanelSource::Full),
            _ => assert_eq!(def.source, PanelSource::RankScope, "{}", def.id),
        }
    }
}

#[test]
fn test_only_industry_counts_are_unlimited() {
    let unlimited = builtin_panels()
        .iter()
        .filter(|d| {
            matches!(
                d.kind,
                PanelKind::CategoryCount {
                    limit: CategoryLimit::All,
                    ..
                }
            )
        })
        .map(|d| d.id)
        .collect::<Vec<_>>();
    assert_eq!(unlimited, vec!["industry_counts"]);
}

#[test]
fn test_ranking_titles_carry_top_n_placeholder() {
    for def in builtin_panels() {
        let ranked = matches!(
            def.kind,
            PanelKind::TopByMetric { .. }
                | PanelKind::GroupMean { .. }
                | PanelKind::CategoryCount {
                    limit: CategoryLimit::TopN,
                    ..
                }
        );
        assert_eq!(def.title.contains("{n}"), ranked, "{}", def.id);
    }
}

#[test]
fn test_panel_spec_serializes_kind_inline() {
    let panel = PanelSpec {
        id: "top_sales",
        title: "Top 2 Companies by Sales".to_string(),
        source: PanelSource::RankScope,
        chart: ChartSpec::Bar(BarSpec {
            category_axis: AxisSpec {
                field: "Company",
                label: "Company",
            },
            value_axis: AxisSpec {
                field: "Sales",
                label: "Sales",
            },
            orientation: Orientation::Vertical,
            color: "orange",
            tick_angle: -30,
            bars: vec![
                Bar {
                    category: "B".to_string(),
                    value: 200.0,
                },
                Bar {
                    category: "C".to_string(),
                    value: f64::NAN,
                },
            ],
        }),
    };

    let v = serde_json::to_value(&panel).unwrap();
    assert_eq!(v["id"], "top_sales");
    assert_eq!(v["kind"], "bar");
    assert_eq!(v["source"], "rank_scope");
    assert_eq!(v["orientation"], "vertical");
    assert_eq!(v["tick_angle"], -30);
    assert_eq!(v["bars"][0]["value"], 200.0);
    assert!(v["bars"][1]["value"].is_null());
    assert!(v.get("chart").is_none());
}

#[test]
fn test_table_row_uses_column_names() {
    let row = TableRow {
        company: "A".to_string(),
        country: "US".to_string(),
        industry: "Tech".to_string(),
        sales: 100.0,
        profits: 10.0,
        assets: 50.0,
        market_value: 200.0,
        roa: 20.0,
        profit_margin: 10.0,
    };
    let v = serde_json::to_value(&row).unwrap();
    assert_eq!(v["Market_Value"], 200.0);
    assert_eq!(v["ROA"], 20.0);
    assert_eq!(v["Profit_Margin"], 10.0);
}
