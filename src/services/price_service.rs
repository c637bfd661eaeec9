use tracing::warn;

use crate::external::quote_provider::QuoteProvider;
use crate::services::quote_cache::{CachedQuote, QuoteCache};

/// Current-market-price lookup: cache first, then the quote provider.
///
/// Provider failures never propagate; 0 is the uniform "no price available"
/// sentinel. Failed fetches are not remembered, so the next pass retries
/// rather than serving a negative entry.
pub async fn fetch_price(provider: &dyn QuoteProvider, cache: &QuoteCache, symbol: &str) -> f64 {
    if symbol.trim().is_empty() {
        return 0.0;
    }

    let key = QuoteCache::price_key(symbol);
    if let Some(CachedQuote::Price(price)) = cache.get(&key) {
        return price;
    }

    match provider.quote(symbol).await {
        Ok(snapshot) => match snapshot.regular_market_price {
            Some(price) => {
                cache.set(key, CachedQuote::Price(price));
                price
            }
            None => {
                warn!("⚠️ Quote for {} carried no regular market price", symbol);
                0.0
            }
        },
        Err(e) => {
            warn!("✗ Price fetch failed for {}: {}", symbol, e);
            0.0
        }
    }
}
