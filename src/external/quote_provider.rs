use async_trait::async_trait;
use thiserror::Error;

/// Current-price snapshot returned by a market quote provider.
///
/// `regular_market_price` is optional because providers can answer a known
/// symbol without a tradeable price (halted, pre-listing, bad data).
#[derive(Debug, Clone, Default)]
pub struct QuoteSnapshot {
    pub regular_market_price: Option<f64>,
}

/// Live P/E ratio and earnings-per-share pair for one symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Fundamentals {
    pub pe_ratio: f64,
    pub latest_earnings: f64,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("not found")]
    NotFound,
}

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn quote(&self, symbol: &str) -> Result<QuoteSnapshot, ProviderError>;
}

#[async_trait]
pub trait FundamentalsProvider: Send + Sync {
    async fn fundamentals(&self, symbol: &str) -> Result<Fundamentals, ProviderError>;
}
