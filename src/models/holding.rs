use serde::{Deserialize, Serialize};

/// One owned equity position as it appears in the static holdings source.
///
/// Holdings are loaded once at startup and never mutated; enrichment produces
/// a separate derived record. The `fallback_*` fields are the last known
/// values from the source sheet, used when live data is unavailable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub sector: String,
    pub purchase_price: f64,
    pub quantity: u32,
    /// purchase_price × quantity, fixed at construction.
    pub investment: f64,
    pub portfolio_percentage: f64,
    pub nse_code: String,
    pub bse_code: String,
    pub fallback_price: f64,
    pub fallback_pe_ratio: f64,
    pub fallback_earnings: f64,
}

impl Holding {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        name: &str,
        symbol: &str,
        sector: &str,
        purchase_price: f64,
        quantity: u32,
        portfolio_percentage: f64,
        nse_code: &str,
        bse_code: &str,
        fallback_price: f64,
        fallback_pe_ratio: f64,
        fallback_earnings: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            sector: sector.to_string(),
            purchase_price,
            quantity,
            investment: purchase_price * quantity as f64,
            portfolio_percentage,
            nse_code: nse_code.to_string(),
            bse_code: bse_code.to_string(),
            fallback_price,
            fallback_pe_ratio,
            fallback_earnings,
        }
    }
}
