use csv::StringRecord;

use crate::input::LoadError;

pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Company",
    "Country",
    "Industry",
    "Sales",
    "Profits",
    "Assets",
    "Market_Value",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericColumn {
    Sales,
    Profits,
    Assets,
    MarketValue,
}

impl NumericColumn {
    pub fn name(self) -> &'static str {
        match self {
            NumericColumn::Sales => "Sales",
            NumericColumn::Profits => "Profits",
            NumericColumn::Assets => "Assets",
            NumericColumn::MarketValue => "Market_Value",
        }
    }
}

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    pub company: usize,
    pub country: usize,
    pub industry: usize,
    pub sales: usize,
    pub profits: usize,
    pub assets: usize,
    pub market_value: usize,
}

impl ColumnIndex {
    pub fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);

        let missing = REQUIRED_COLUMNS
            .iter()
            .filter(|name| position(name).is_none())
            .map(|name| name.to_string())
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns(missing));
        }

        let at = |name: &str| position(name).unwrap_or_default();
        Ok(Self {
            company: at("Company"),
            country: at("Country"),
            industry: at("Industry"),
            sales: at("Sales"),
            profits: at("Profits"),
            assets: at("Assets"),
            market_value: at("Market_Value"),
        })
    }

    pub fn numeric(&self, column: NumericColumn) -> usize {
        match column {
            NumericColumn::Sales => self.sales,
            NumericColumn::Profits => self.profits,
            NumericColumn::Assets => self.assets,
            NumericColumn::MarketValue => self.market_value,
        }
    }
}
