use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::PortfolioResponse;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_portfolio))
}

/// The one read endpoint of the system. Idempotent and safe to poll; outbound
/// provider traffic is bounded by the quote cache.
#[axum::debug_handler]
pub async fn get_portfolio(
    State(state): State<AppState>,
) -> Result<Json<PortfolioResponse>, AppError> {
    info!("GET /api/portfolio - Building portfolio snapshot");
    let portfolio = services::portfolio_service::build_snapshot(&state)
        .await
        .map_err(|e| {
            error!("Failed to build portfolio snapshot: {}", e);
            e
        })?;
    Ok(Json(PortfolioResponse {
        portfolio,
        error: None,
    }))
}
