use tracing::warn;

use crate::external::quote_provider::{Fundamentals, FundamentalsProvider};
use crate::services::quote_cache::{CachedQuote, QuoteCache};

/// P/E and EPS lookup: cache first, then the fundamentals provider.
///
/// Parse-level misses arrive as 0 fields inside an `Ok` and are cached like
/// any other answer; only transport failures skip the cache, degrade to an
/// all-zero pair, and retry on the next pass.
pub async fn fetch_fundamentals(
    provider: &dyn FundamentalsProvider,
    cache: &QuoteCache,
    symbol: &str,
) -> Fundamentals {
    let key = QuoteCache::fundamentals_key(symbol);
    if let Some(CachedQuote::Fundamentals(fundamentals)) = cache.get(&key) {
        return fundamentals;
    }

    match provider.fundamentals(symbol).await {
        Ok(fundamentals) => {
            cache.set(key, CachedQuote::Fundamentals(fundamentals));
            fundamentals
        }
        Err(e) => {
            warn!("✗ Fundamentals fetch failed for {}: {}", symbol, e);
            Fundamentals::default()
        }
    }
}
