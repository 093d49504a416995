use serde::Serialize;

use crate::model::metrics::{BASE_METRICS, Dimension, Metric};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub color: &'static str,
    pub tick_angle: i32,
    pub orientation: Orientation,
}

/// Which record set a panel is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelSource {
    /// Always the current filter result.
    Filtered,
    /// Always the whole dataset.
    Full,
    /// Whatever the run's rank scope says.
    RankScope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryLimit {
    All,
    TopN,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelKind {
    Table,
    Scatter {
        x: Metric,
        y: Metric,
        color: Dimension,
        hover: Dimension,
    },
    CompanyKpi {
        metrics: &'static [Metric],
    },
    Correlation {
        metrics: &'static [Metric],
        colorscale: &'static str,
    },
    CategoryCount {
        dimension: Dimension,
        limit: CategoryLimit,
        value_label: &'static str,
        style: BarStyle,
    },
    TopByMetric {
        metric: Metric,
        style: BarStyle,
    },
    GroupMean {
        group: Dimension,
        metric: Metric,
        style: BarStyle,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelDef {
    pub id: &'static str,
    /// `{n}` is replaced by the run's top-N when rendered.
    pub title: &'static str,
    pub source: PanelSource,
    pub kind: PanelKind,
}

const fn vertical(color: &'static str, tick_angle: i32) -> BarStyle {
    BarStyle {
        color,
        tick_angle,
        orientation: Orientation::Vertical,
    }
}

const BUILTIN_PANELS: &[PanelDef] = &[
    PanelDef {
        id: "filtered_table",
        title: "Filtered Data Table",
        source: PanelSource::Filtered,
        kind: PanelKind::Table,
    },
    PanelDef {
        id: "sales_vs_profits",
        title: "Sales vs. Profits",
        source: PanelSource::Filtered,
        kind: PanelKind::Scatter {
            x: Metric::Sales,
            y: Metric::Profits,
            color: Dimension::Country,
            hover: Dimension::Company,
        },
    },
    PanelDef {
        id: "assets_vs_market_value",
        title: "Assets vs. Market Value",
        source: PanelSource::Filtered,
        kind: PanelKind::Scatter {
            x: Metric::Assets,
            y: Metric::MarketValue,
            color: Dimension::Country,
            hover: Dimension::Company,
        },
    },
    PanelDef {
        id: "company_kpi",
        title: "Interactive Company KPI",
        source: PanelSource::Filtered,
        kind: PanelKind::CompanyKpi {
            metrics: &BASE_METRICS,
        },
    },
    PanelDef {
        id: "metric_correlation",
        title: "Correlation between Financial Metrics",
        source: PanelSource::Full,
        kind: PanelKind::Correlation {
            metrics: &BASE_METRICS,
            colorscale: "Viridis",
        },
    },
    PanelDef {
        id: "industry_counts",
        title: "Industry Wise Count of Companies",
        source: PanelSource::RankScope,
        kind: PanelKind::CategoryCount {
            dimension: Dimension::Industry,
            limit: CategoryLimit::All,
            value_label: "Number of Companies",
            style: vertical("blue", -45),
        },
    },
    PanelDef {
        id: "top_countries",
        title: "Top {n} Countries by Number of Companies",
        source: PanelSource::RankScope,
        kind: PanelKind::CategoryCount {
            dimension: Dimension::Country,
            limit: CategoryLimit::TopN,
            value_label: "Number of Companies",
            style: vertical("green", -30),
        },
    },
    PanelDef {
        id: "top_sales",
        title: "Top {n} Companies by Sales",
        source: PanelSource::RankScope,
        kind: PanelKind::TopByMetric {
            metric: Metric::Sales,
            style: vertical("orange", -30),
        },
    },
    PanelDef {
        id: "top_profits",
        title: "Top {n} Companies by Profits",
        source: PanelSource::RankScope,
        kind: PanelKind::TopByMetric {
            metric: Metric::Profits,
            style: vertical("red", -30),
        },
    },
    PanelDef {
        id: "top_assets",
        title: "Top {n} Companies by Assets",
        source: PanelSource::RankScope,
        kind: PanelKind::TopByMetric {
            metric: Metric::Assets,
            style: vertical("purple", -30),
        },
    },
    PanelDef {
        id: "top_market_value",
        title: "Top {n} Companies by Market Value",
        source: PanelSource::RankScope,
        kind: PanelKind::TopByMetric {
            metric: Metric::MarketValue,
            style: vertical("cyan", -30),
        },
    },
    PanelDef {
        id: "top_roa",
        title: "Top {n} Companies by Return on Assets (ROA)",
        source: PanelSource::RankScope,
        kind: PanelKind::TopByMetric {
            metric: Metric::Roa,
            style: BarStyle {
                color: "lightblue",
                tick_angle: 0,
                orientation: Orientation::Horizontal,
            },
        },
    },
    PanelDef {
        id: "top_profit_margin_industries",
        title: "Top {n} Industries by Average Profit Margin",
        source: PanelSource::RankScope,
        kind: PanelKind::GroupMean {
            group: Dimension::Industry,
            metric: Metric::ProfitMargin,
            style: vertical("cyan", -35),
        },
    },
];

pub fn builtin_panels() -> &'static [PanelDef] {
    BUILTIN_PANELS
}
