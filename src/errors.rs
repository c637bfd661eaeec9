use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use http::StatusCode;
use thiserror::Error;

use crate::models::{PortfolioResponse, PortfolioSnapshot};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Enrichment pipeline failed: {0}")]
    Enrichment(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            // The dashboard contract on pipeline failure: a 500 carrying an
            // all-zero snapshot plus a generic error string, never partial data.
            AppError::Enrichment(_) => {
                let body = PortfolioResponse {
                    portfolio: PortfolioSnapshot::empty(Utc::now()),
                    error: Some("Failed to process portfolio data".to_string()),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
