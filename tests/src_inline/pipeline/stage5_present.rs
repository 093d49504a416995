use super::*;
use crate::fixtures::sample_dataset;
use crate::model::selection::FilterSelection;
use crate::panels::Orientation;
use crate::pipeline::{ViewParams, compute_views};

fn panels_for(company: Option<&str>, params: ViewParams) -> Vec<PanelSpec> {
    let dataset = sample_dataset();
    let selection = FilterSelection::all(&dataset);
    let views = compute_views(&dataset, &selection, company, &params);
    present(&views)
}

fn find<'a>(panels: &'a [PanelSpec], id: &str) -> &'a PanelSpec {
    panels.iter().find(|p| p.id == id).unwrap()
}

#[test]
fn test_every_panel_is_presented_in_order() {
    let panels = panels_for(None, ViewParams::default());
    let ids = panels.iter().map(|p| p.id).collect::<Vec<_>>();
    assert_eq!(
        ids,
        vec![
            "filtered_table",
            "sales_vs_profits",
            "assets_vs_market_value",
            "company_kpi",
            "metric_correlation",
            "industry_counts",
            "top_countries",
            "top_sales",
            "top_profits",
            "top_assets",
            "top_market_value",
            "top_roa",
            "top_profit_margin_industries",
        ]
    );
}

#[test]
fn test_titles_carry_top_n() {
    let params = ViewParams {
        top_n: 3,
        ..ViewParams::default()
    };
    let panels = panels_for(None, params);
    assert_eq!(find(&panels, "top_sales").title, "Top 3 Companies by Sales");
    assert_eq!(
        find(&panels, "industry_counts").title,
        "Industry Wise Count of Companies"
    );
}

#[test]
fn test_table_panel() {
    let panels = panels_for(None, ViewParams::default());
    let ChartSpec::Table(table) = &find(&panels, "filtered_table").chart else {
        panic!("expected table");
    };
    assert_eq!(table.columns, TABLE_COLUMNS.to_vec());
    assert_eq!(table.rows.len(), 9);
    assert_eq!(table.rows[0].company, "Apple");
}

#[test]
fn test_scatter_panel() {
    let panels = panels_for(None, ViewParams::default());
    let ChartSpec::Scatter(scatter) = &find(&panels, "assets_vs_market_value").chart else {
        panic!("expected scatter");
    };
    assert_eq!(scatter.x.field, "Assets");
    assert_eq!(scatter.y.field, "Market_Value");
    assert_eq!(scatter.y.label, "Market Value");
    assert_eq!(scatter.color_by, "Country");
    assert_eq!(scatter.hover, "Company");
    assert_eq!(scatter.points.len(), 9);
    assert_eq!(scatter.points[1].label, "JPMorgan Chase");
    assert_eq!(scatter.points[1].category, "United States");
    assert_eq!(scatter.points[1].x, 3954.7);
}

#[test]
fn test_heatmap_panel() {
    let panels = panels_for(None, ViewParams::default());
    let ChartSpec::Heatmap(heatmap) = &find(&panels, "metric_correlation").chart else {
        panic!("expected heatmap");
    };
    assert_eq!(heatmap.rows, vec!["Sales", "Profits", "Assets", "Market_Value"]);
    assert_eq!(heatmap.rows, heatmap.columns);
    assert_eq!(heatmap.annotations[0][0], "1.00");
    assert_eq!(heatmap.colorscale, "Viridis");
}

#[test]
fn test_bar_panels_carry_style() {
    let panels = panels_for(None, ViewParams::default());

    let ChartSpec::Bar(industries) = &find(&panels, "industry_counts").chart else {
        panic!("expected bar");
    };
    assert_eq!(industries.color, "blue");
    assert_eq!(industries.tick_angle, -45);
    assert_eq!(industries.bars.len(), 4);
    assert_eq!(industries.bars[0].category, "Banking");
    assert_eq!(industries.bars[0].value, 4.0);

    let ChartSpec::Bar(roa) = &find(&panels, "top_roa").chart else {
        panic!("expected bar");
    };
    assert_eq!(roa.orientation, Orientation::Horizontal);
    assert_eq!(roa.color, "lightblue");
    assert_eq!(roa.value_axis.label, "ROA (%)");
    assert_eq!(roa.bars[0].category, "Apple");
    assert_eq!(roa.bars.len(), 9);

    let ChartSpec::Bar(margins) = &find(&panels, "top_profit_margin_industries").chart else {
        panic!("expected bar");
    };
    assert_eq!(margins.category_axis.field, "Industry");
    assert_eq!(margins.value_axis.label, "Profit Margin (%)");
}

#[test]
fn test_kpi_panel_falls_back() {
    let panels = panels_for(Some("Nokia"), ViewParams::default());
    let ChartSpec::Metrics(kpi) = &find(&panels, "company_kpi").chart else {
        panic!("expected metrics");
    };
    assert_eq!(kpi.requested.as_deref(), Some("Nokia"));
    assert_eq!(kpi.selected.as_deref(), Some("Apple"));
    assert!(kpi.fell_back);
    assert_eq!(kpi.options.len(), 9);
    let labels = kpi.cards.iter().map(|c| c.label).collect::<Vec<_>>();
    assert_eq!(labels, vec!["Sales", "Profits", "Assets", "Market_Value"]);
    assert_eq!(kpi.cards[0].value, 378.7);
}

#[test]
fn test_mismatched_view_is_skipped() {
    let def = &crate::panels::defs::builtin_panels()[0];
    let view = DerivedView::Counts(Vec::new());
    assert!(present_panel(def, &view, 10).is_none());
}
