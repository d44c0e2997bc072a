//! Market data collaborators.
//!
//! Every external endpoint sits behind an async trait so the rest of the
//! crate can be exercised against mocks. Lookup failures are recoverable by
//! contract: callers fall back (unknown sector, purchase-price valuation,
//! scanner exclusion) instead of propagating them.

mod cache;
mod client;
mod sectors;

pub use cache::{Clock, QuoteCache, SystemClock};
pub use client::MarketDataClient;
pub use sectors::{classify, resolve_sector};

use crate::error::Result;
use crate::model::PriceQuote;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Sector/industry strings as reported by the reference endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyProfile {
    /// Explicit sector classification, when the endpoint has one.
    pub sector: Option<String>,
    /// Free-form industry string, used for keyword classification.
    pub industry: Option<String>,
}

/// Per-ticker snapshot used by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSnapshot {
    /// Instantaneous price.
    pub price: Decimal,
    /// Market capitalization in dollars.
    pub market_cap: Decimal,
    /// Last value of the 150-day simple moving average series.
    pub ma150: Decimal,
    /// Industry string as reported by the endpoint.
    pub sector: String,
    /// Company name.
    pub name: String,
}

/// Source of current price quotes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteFeed: Send + Sync {
    /// Current quote for a ticker, derived from its recent daily closes.
    async fn quote(&self, ticker: &str) -> Result<PriceQuote>;
}

/// Source of company reference data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReferenceFeed: Send + Sync {
    /// Sector/industry profile for a ticker.
    async fn profile(&self, ticker: &str) -> Result<CompanyProfile>;

    /// Company display name for a ticker, when the feed knows one.
    async fn company_name(&self, ticker: &str) -> Result<Option<String>>;
}

/// Source of scanner indicator data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IndicatorFeed: Send + Sync {
    /// Full indicator snapshot for a ticker. Fails when any of the
    /// underlying figures is unavailable.
    async fn snapshot(&self, ticker: &str) -> Result<IndicatorSnapshot>;
}
