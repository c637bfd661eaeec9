use chrono::Utc;
use tracing::info;

use crate::errors::AppError;
use crate::models::PortfolioSnapshot;
use crate::services::aggregation_service;
use crate::state::AppState;

/// One full pipeline pass: enrich every holding, roll up sectors, assemble
/// the snapshot. Runs fresh per request; only the quote lookups underneath
/// are cached.
pub async fn build_snapshot(state: &AppState) -> Result<PortfolioSnapshot, AppError> {
    if state.holdings.is_empty() {
        info!("📊 Holdings source is empty, returning empty snapshot");
        return Ok(PortfolioSnapshot::empty(Utc::now()));
    }

    let stocks = state.enricher.enrich(&state.holdings).await?;

    let sector_summaries = aggregation_service::summarize_sectors(&stocks);
    let totals = aggregation_service::portfolio_totals(&stocks);

    Ok(PortfolioSnapshot {
        stocks,
        sector_summaries,
        total_investment: totals.investment,
        total_present_value: totals.present_value,
        total_gain_loss: totals.gain_loss,
        total_gain_loss_percentage: totals.gain_loss_percentage,
        last_updated: Utc::now(),
    })
}
