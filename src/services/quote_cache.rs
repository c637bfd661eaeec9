use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use crate::external::quote_provider::Fundamentals;

/// Cache validity window. Quotes older than this are treated as absent.
pub const CACHE_TTL_MINUTES: i64 = 15;

/// Payload stored per key: either a bare price or a fundamentals pair.
#[derive(Debug, Clone)]
pub enum CachedQuote {
    Price(f64),
    Fundamentals(Fundamentals),
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: CachedQuote,
    inserted_at: DateTime<Utc>,
}

/// Time source abstraction so tests can age entries deterministically.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Time-to-live key/value store shared by the price and fundamentals fetchers.
///
/// `get` answers absent both for keys never set and for entries past the TTL;
/// callers cannot tell the two apart. Expired entries are only ever replaced
/// by the next `set` on the same key, there is no sweep. Growth is bounded by
/// the number of distinct symbols tracked, so that is acceptable.
pub struct QuoteCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl QuoteCache {
    pub fn new() -> Self {
        Self::with_clock(Duration::minutes(CACHE_TTL_MINUTES), Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            clock,
        }
    }

    pub fn get(&self, key: &str) -> Option<CachedQuote> {
        let entry = self.entries.get(key)?;
        if self.clock.now() - entry.inserted_at < self.ttl {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    pub fn set(&self, key: impl Into<String>, value: CachedQuote) {
        self.entries.insert(
            key.into(),
            CacheEntry {
                value,
                inserted_at: self.clock.now(),
            },
        );
    }

    /// Key namespaces keep the two fetchers from colliding on a symbol.
    pub fn price_key(symbol: &str) -> String {
        format!("cmp_{}", symbol)
    }

    pub fn fundamentals_key(symbol: &str) -> String {
        format!("fundamentals_{}", symbol)
    }
}

impl Default for QuoteCache {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::test_clock::ManualClock;
    use super::*;

    fn price_of(cached: Option<CachedQuote>) -> Option<f64> {
        match cached {
            Some(CachedQuote::Price(p)) => Some(p),
            _ => None,
        }
    }

    #[test]
    fn get_returns_fresh_entries() {
        let cache = QuoteCache::new();
        cache.set(QuoteCache::price_key("HDFCBANK.NS"), CachedQuote::Price(1700.15));

        let cached = cache.get(&QuoteCache::price_key("HDFCBANK.NS"));
        assert_eq!(price_of(cached), Some(1700.15));
    }

    #[test]
    fn never_set_and_expired_are_both_absent() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let cache = QuoteCache::with_clock(Duration::minutes(15), clock.clone());

        assert!(cache.get("cmp_UNSEEN").is_none());

        cache.set("cmp_SEEN", CachedQuote::Price(42.0));
        clock.advance(Duration::minutes(16));
        assert!(cache.get("cmp_SEEN").is_none());
    }

    #[test]
    fn entry_is_valid_until_just_before_ttl() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let cache = QuoteCache::with_clock(Duration::minutes(15), clock.clone());

        cache.set("cmp_X", CachedQuote::Price(1.0));
        clock.advance(Duration::minutes(14));
        assert!(cache.get("cmp_X").is_some());

        clock.advance(Duration::minutes(1));
        assert!(cache.get("cmp_X").is_none());
    }

    #[test]
    fn set_overwrites_expired_entry() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let cache = QuoteCache::with_clock(Duration::minutes(15), clock.clone());

        cache.set("cmp_X", CachedQuote::Price(1.0));
        clock.advance(Duration::minutes(20));
        cache.set("cmp_X", CachedQuote::Price(2.0));

        assert_eq!(price_of(cache.get("cmp_X")), Some(2.0));
    }

    #[test]
    fn price_and_fundamentals_keys_do_not_collide() {
        let cache = QuoteCache::new();
        cache.set(QuoteCache::price_key("X"), CachedQuote::Price(10.0));
        cache.set(
            QuoteCache::fundamentals_key("X"),
            CachedQuote::Fundamentals(Fundamentals {
                pe_ratio: 18.0,
                latest_earnings: 91.0,
            }),
        );

        assert!(matches!(
            cache.get(&QuoteCache::price_key("X")),
            Some(CachedQuote::Price(_))
        ));
        assert!(matches!(
            cache.get(&QuoteCache::fundamentals_key("X")),
            Some(CachedQuote::Fundamentals(_))
        ));
    }
}
