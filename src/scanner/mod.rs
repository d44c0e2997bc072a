//! Large-cap scanner.
//!
//! A linear filter over a fixed reference universe: keep tickers trading
//! close to their 150-day moving average with a large enough market cap.
//! No internal state, no retries; a ticker whose data cannot be fetched is
//! simply left out of the report.

mod universe;

pub use universe::{UNIVERSE, UniverseEntry};

use crate::config::ScannerConfig;
use crate::market::IndicatorFeed;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// A ticker that passed the scan rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanHit {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name as reported by the feed.
    pub name: String,
    /// Industry string as reported by the feed.
    pub sector: String,
    /// Instantaneous price.
    pub price: Decimal,
    /// Market capitalization in dollars.
    pub market_cap: Decimal,
    /// 150-day simple moving average.
    pub ma150: Decimal,
    /// Percentage deviation of price from the moving average.
    pub deviation_pct: Decimal,
}

/// Result of a full scan pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Tickers that passed the rule.
    pub hits: Vec<ScanHit>,
    /// How many tickers were scanned.
    pub scanned: usize,
    /// When the scan finished.
    pub completed_at: DateTime<Utc>,
}

/// Scanner over the built-in universe.
pub struct Scanner {
    feed: Arc<dyn IndicatorFeed>,
    max_deviation_pct: Decimal,
    min_market_cap: Decimal,
}

impl Scanner {
    /// Create a scanner with the given rule configuration.
    pub fn new(feed: Arc<dyn IndicatorFeed>, config: &ScannerConfig) -> Self {
        Self {
            feed,
            max_deviation_pct: Decimal::try_from(config.max_deviation_pct)
                .unwrap_or_else(|_| Decimal::from(5)),
            min_market_cap: Decimal::try_from(config.min_market_cap)
                .unwrap_or_else(|_| Decimal::from(1_000_000_000)),
        }
    }

    /// Scan the built-in universe.
    pub async fn scan(&self) -> ScanReport {
        self.scan_universe(UNIVERSE).await
    }

    /// Scan an explicit universe.
    pub async fn scan_universe(&self, universe: &[UniverseEntry]) -> ScanReport {
        let mut hits = Vec::new();

        for entry in universe {
            let snapshot = match self.feed.snapshot(entry.symbol).await {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    debug!("scan: skipping {}: {}", entry.symbol, e);
                    continue;
                }
            };
            if snapshot.ma150.is_zero() {
                debug!("scan: skipping {}: zero moving average", entry.symbol);
                continue;
            }

            let deviation_pct =
                (snapshot.price - snapshot.ma150) / snapshot.ma150 * Decimal::ONE_HUNDRED;
            if deviation_pct.abs() <= self.max_deviation_pct
                && snapshot.market_cap >= self.min_market_cap
            {
                hits.push(ScanHit {
                    symbol: entry.symbol.to_string(),
                    name: snapshot.name,
                    sector: snapshot.sector,
                    price: snapshot.price,
                    market_cap: snapshot.market_cap,
                    ma150: snapshot.ma150,
                    deviation_pct,
                });
            }
        }

        info!(
            "scan complete: {} of {} tickers matched",
            hits.len(),
            universe.len()
        );
        ScanReport {
            hits,
            scanned: universe.len(),
            completed_at: Utc::now(),
        }
    }
}
