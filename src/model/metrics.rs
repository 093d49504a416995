use serde::Serialize;

use crate::model::record::CompanyRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    Sales,
    Profits,
    Assets,
    MarketValue,
    Roa,
    ProfitMargin,
}

/// Metrics that come straight from the source columns.
pub const BASE_METRICS: [Metric; 4] = [
    Metric::Sales,
    Metric::Profits,
    Metric::Assets,
    Metric::MarketValue,
];

impl Metric {
    pub fn value(self, record: &CompanyRecord) -> f64 {
        match self {
            Metric::Sales => record.sales,
            Metric::Profits => record.profits,
            Metric::Assets => record.assets,
            Metric::MarketValue => record.market_value,
            Metric::Roa => record.roa,
            Metric::ProfitMargin => record.profit_margin,
        }
    }

    /// Column name as it appears in the source CSV and the table output.
    pub fn column(self) -> &'static str {
        match self {
            Metric::Sales => "Sales",
            Metric::Profits => "Profits",
            Metric::Assets => "Assets",
            Metric::MarketValue => "Market_Value",
            Metric::Roa => "ROA",
            Metric::ProfitMargin => "Profit_Margin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Sales => "Sales",
            Metric::Profits => "Profits",
            Metric::Assets => "Assets",
            Metric::MarketValue => "Market Value",
            Metric::Roa => "ROA (%)",
            Metric::ProfitMargin => "Profit Margin (%)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dimension {
    Company,
    Country,
    Industry,
}

impl Dimension {
    pub fn value(self, record: &CompanyRecord) -> &str {
        match self {
            Dimension::Company => &record.company,
            Dimension::Country => &record.country,
            Dimension::Industry => &record.industry,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Dimension::Company => "Company",
            Dimension::Country => "Country",
            Dimension::Industry => "Industry",
        }
    }
}
