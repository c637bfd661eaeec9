use std::sync::Arc;

use chrono::Utc;
use tracing::error;

use crate::errors::AppError;
use crate::external::quote_provider::{FundamentalsProvider, QuoteProvider};
use crate::models::{EnrichedHolding, Holding};
use crate::services::fundamentals_service;
use crate::services::price_service;
use crate::services::quote_cache::QuoteCache;

/// Holdings fetched concurrently within one pass; bounds in-flight external
/// calls to twice this number (price + fundamentals per holding).
const BATCH_SIZE: usize = 10;

/// Fans out the live price and fundamentals lookups for each holding and
/// merges the answers with the holding's static fallbacks.
pub struct Enricher {
    quotes: Arc<dyn QuoteProvider>,
    fundamentals: Arc<dyn FundamentalsProvider>,
    cache: Arc<QuoteCache>,
}

impl Enricher {
    pub fn new(
        quotes: Arc<dyn QuoteProvider>,
        fundamentals: Arc<dyn FundamentalsProvider>,
        cache: Arc<QuoteCache>,
    ) -> Self {
        Self {
            quotes,
            fundamentals,
            cache,
        }
    }

    /// Enrich every holding, preserving input order.
    ///
    /// Batches run strictly one after another; holdings inside a batch run
    /// concurrently. A holding whose lookups fail degrades to its fallbacks,
    /// it never aborts the pass. The only error out of here is a lost worker
    /// task, which the HTTP boundary turns into the 500 envelope.
    pub async fn enrich(&self, holdings: &[Holding]) -> Result<Vec<EnrichedHolding>, AppError> {
        let mut enriched = Vec::with_capacity(holdings.len());

        for batch in holdings.chunks(BATCH_SIZE) {
            let tasks: Vec<_> = batch
                .iter()
                .map(|holding| {
                    let holding = holding.clone();
                    let quotes = Arc::clone(&self.quotes);
                    let fundamentals = Arc::clone(&self.fundamentals);
                    let cache = Arc::clone(&self.cache);
                    tokio::spawn(
                        async move { enrich_one(holding, quotes, fundamentals, cache).await },
                    )
                })
                .collect();

            // join_all keeps spawn order, so output order stays structural
            // rather than completion-ordered.
            for result in futures::future::join_all(tasks).await {
                let holding = result.map_err(|e| {
                    error!("✗ Enrichment worker lost: {}", e);
                    AppError::Enrichment(e.to_string())
                })?;
                enriched.push(holding);
            }
        }

        Ok(enriched)
    }
}

async fn enrich_one(
    holding: Holding,
    quotes: Arc<dyn QuoteProvider>,
    fundamentals: Arc<dyn FundamentalsProvider>,
    cache: Arc<QuoteCache>,
) -> EnrichedHolding {
    // No symbol means nothing to look up: static fallbacks pass through.
    if holding.symbol.trim().is_empty() {
        return EnrichedHolding::from_holding(
            &holding,
            holding.fallback_price,
            holding.fallback_pe_ratio,
            holding.fallback_earnings,
            Utc::now(),
        );
    }

    let (live_price, live_fundamentals) = tokio::join!(
        price_service::fetch_price(quotes.as_ref(), cache.as_ref(), &holding.symbol),
        fundamentals_service::fetch_fundamentals(
            fundamentals.as_ref(),
            cache.as_ref(),
            &holding.symbol
        ),
    );

    // Live wins only when it carries a real value; 0 is "unknown".
    let cmp = if live_price > 0.0 {
        live_price
    } else {
        holding.fallback_price
    };
    let pe_ratio = if live_fundamentals.pe_ratio != 0.0 {
        live_fundamentals.pe_ratio
    } else {
        holding.fallback_pe_ratio
    };
    let latest_earnings = if live_fundamentals.latest_earnings != 0.0 {
        live_fundamentals.latest_earnings
    } else {
        holding.fallback_earnings
    };

    EnrichedHolding::from_holding(&holding, cmp, pe_ratio, latest_earnings, Utc::now())
}
