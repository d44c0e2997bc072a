//! Short-lived quote cache.

use crate::model::PriceQuote;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Time source for the cache, injectable so tests can run on a fake clock.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone)]
struct CachedQuote {
    quote: PriceQuote,
    fetched_at: DateTime<Utc>,
}

/// Per-ticker quote cache with a fixed time-to-live.
///
/// Entries older than the TTL are treated as absent. There is no
/// single-flight guarantee: two concurrent lookups for the same ticker may
/// both miss and both hit the feed before either result lands here.
pub struct QuoteCache {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    entries: Mutex<HashMap<String, CachedQuote>>,
}

impl QuoteCache {
    /// Create a cache with the given TTL on the system clock.
    pub fn new(ttl_secs: u64) -> Self {
        Self::with_clock(ttl_secs, Arc::new(SystemClock))
    }

    /// Create a cache reading time from an injected clock.
    pub fn with_clock(ttl_secs: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl: Duration::seconds(ttl_secs as i64),
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Fresh quote for a ticker, if one is cached.
    pub fn get(&self, ticker: &str) -> Option<PriceQuote> {
        let entries = self.entries.lock().ok()?;
        let entry = entries.get(ticker)?;
        if self.clock.now() - entry.fetched_at < self.ttl {
            Some(entry.quote.clone())
        } else {
            None
        }
    }

    /// Insert or replace the cached quote for its ticker.
    pub fn put(&self, quote: PriceQuote) {
        if let Ok(mut entries) = self.entries.lock() {
            let fetched_at = self.clock.now();
            entries.insert(quote.ticker.clone(), CachedQuote { quote, fetched_at });
        }
    }
}
