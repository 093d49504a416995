pub mod defs;

use serde::Serialize;

pub use defs::{Orientation, PanelSource};

/// One rendered dashboard panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelSpec {
    pub id: &'static str,
    pub title: String,
    pub source: PanelSource,
    #[serde(flatten)]
    pub chart: ChartSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Table(TableSpec),
    Scatter(ScatterSpec),
    Bar(BarSpec),
    Heatmap(HeatmapSpec),
    Metrics(MetricsSpec),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSpec {
    pub columns: Vec<&'static str>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Sales")]
    pub sales: f64,
    #[serde(rename = "Profits")]
    pub profits: f64,
    #[serde(rename = "Assets")]
    pub assets: f64,
    #[serde(rename = "Market_Value")]
    pub market_value: f64,
    #[serde(rename = "ROA")]
    pub roa: f64,
    #[serde(rename = "Profit_Margin")]
    pub profit_margin: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSpec {
    pub x: AxisSpec,
    pub y: AxisSpec,
    pub color_by: &'static str,
    pub hover: &'static str,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub label: String,
    pub category: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisSpec {
    pub field: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSpec {
    pub category_axis: AxisSpec,
    pub value_axis: AxisSpec,
    pub orientation: Orientation,
    pub color: &'static str,
    pub tick_angle: i32,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub category: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapSpec {
    pub rows: Vec<&'static str>,
    pub columns: Vec<&'static str>,
    pub values: Vec<Vec<f64>>,
    /// Cell text, two decimals.
    pub annotations: Vec<Vec<String>>,
    pub colorscale: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSpec {
    pub options: Vec<String>,
    pub requested: Option<String>,
    pub selected: Option<String>,
    pub fell_back: bool,
    pub cards: Vec<MetricCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: f64,
}

#[cfg(test)]
#[path = "../../tests/src_inline/panels/tests.rs"]
mod tests;
