#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRecord {
    pub company: String,
    pub country: String,
    pub industry: String,
    pub sales: f64,
    pub profits: f64,
    pub assets: f64,
    pub market_value: f64,
    /// Profits / Assets * 100. Non-finite when assets is zero.
    pub roa: f64,
    /// Profits / Sales * 100. Non-finite when sales is zero.
    pub profit_margin: f64,
}

impl CompanyRecord {
    pub fn new(
        company: String,
        country: String,
        industry: String,
        sales: f64,
        profits: f64,
        assets: f64,
        market_value: f64,
    ) -> Self {
        Self {
            company,
            country,
            industry,
            sales,
            profits,
            assets,
            market_value,
            roa: percent_ratio(profits, assets),
            profit_margin: percent_ratio(profits, sales),
        }
    }
}

/// `numerator / denominator * 100` with plain IEEE-754 division.
pub fn percent_ratio(numerator: f64, denominator: f64) -> f64 {
    (numerator / denominator) * 100.0
}
