use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Holding;

/// A holding plus its live-derived fields; one row of the dashboard table.
///
/// `present_value`, `gain_loss` and `gain_loss_percentage` are recomputed from
/// the resolved price on every enrichment pass, so they can never disagree
/// with `cmp` and `quantity`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedHolding {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub sector: String,
    pub purchase_price: f64,
    pub quantity: u32,
    pub investment: f64,
    pub portfolio_percentage: f64,
    pub nse_code: String,
    pub bse_code: String,
    /// Current market price. 0 means "unknown", not a free stock.
    pub cmp: f64,
    pub present_value: f64,
    pub gain_loss: f64,
    pub gain_loss_percentage: f64,
    /// 0 signals "unavailable"; the frontend renders a placeholder.
    pub pe_ratio: f64,
    pub latest_earnings: f64,
    pub last_updated: DateTime<Utc>,
}

impl EnrichedHolding {
    /// The only constructor, so the derived fields stay internally consistent.
    pub fn from_holding(
        holding: &Holding,
        cmp: f64,
        pe_ratio: f64,
        latest_earnings: f64,
        now: DateTime<Utc>,
    ) -> Self {
        let present_value = cmp * holding.quantity as f64;
        let gain_loss = present_value - holding.investment;
        let gain_loss_percentage = if holding.investment > 0.0 {
            gain_loss / holding.investment * 100.0
        } else {
            0.0
        };

        Self {
            id: holding.id.clone(),
            name: holding.name.clone(),
            symbol: holding.symbol.clone(),
            sector: holding.sector.clone(),
            purchase_price: holding.purchase_price,
            quantity: holding.quantity,
            investment: holding.investment,
            portfolio_percentage: holding.portfolio_percentage,
            nse_code: holding.nse_code.clone(),
            bse_code: holding.bse_code.clone(),
            cmp,
            present_value,
            gain_loss,
            gain_loss_percentage,
            pe_ratio,
            latest_earnings,
            last_updated: now,
        }
    }
}

/// Aggregate over all enriched holdings sharing a sector label.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorSummary {
    pub sector: String,
    pub stock_count: usize,
    pub total_investment: f64,
    pub total_present_value: f64,
    pub total_gain_loss: f64,
    pub total_gain_loss_percentage: f64,
}

impl SectorSummary {
    pub fn empty(sector: String) -> Self {
        Self {
            sector,
            stock_count: 0,
            total_investment: 0.0,
            total_present_value: 0.0,
            total_gain_loss: 0.0,
            total_gain_loss_percentage: 0.0,
        }
    }
}

/// Portfolio-wide sums, computed directly over all holdings rather than as a
/// sum of sector sums.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortfolioTotals {
    pub investment: f64,
    pub present_value: f64,
    pub gain_loss: f64,
    pub gain_loss_percentage: f64,
}

/// Top-level pipeline result; the wire contract of `GET /api/portfolio`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub stocks: Vec<EnrichedHolding>,
    pub sector_summaries: Vec<SectorSummary>,
    pub total_investment: f64,
    pub total_present_value: f64,
    pub total_gain_loss: f64,
    pub total_gain_loss_percentage: f64,
    pub last_updated: DateTime<Utc>,
}

impl PortfolioSnapshot {
    /// All-zero snapshot, used for the empty holdings source and for the
    /// 500 error envelope.
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            stocks: Vec::new(),
            sector_summaries: Vec::new(),
            total_investment: 0.0,
            total_present_value: 0.0,
            total_gain_loss: 0.0,
            total_gain_loss_percentage: 0.0,
            last_updated: now,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioResponse {
    pub portfolio: PortfolioSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
