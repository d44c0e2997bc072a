//! Live price quotes and price provenance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A current price quote for a ticker.
///
/// Sourced from an external feed; cached transiently, never persisted as
/// ground truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Ticker symbol.
    pub ticker: String,
    /// Current price (last daily close).
    pub price: Decimal,
    /// Day-over-day absolute change.
    pub change: Decimal,
    /// Day-over-day percent change.
    pub change_pct: Decimal,
}

impl PriceQuote {
    /// Derive a quote from a daily close series.
    ///
    /// The last close is the current price, change is the delta from the
    /// prior close. With a single close there is no baseline and both
    /// change figures are zero. Returns `None` for an empty series.
    pub fn from_closes(ticker: impl Into<String>, closes: &[Decimal]) -> Option<Self> {
        let last = *closes.last()?;
        let prev = if closes.len() >= 2 {
            closes[closes.len() - 2]
        } else {
            last
        };
        let change = last - prev;
        let change_pct = if prev.is_zero() {
            Decimal::ZERO
        } else {
            change / prev * Decimal::ONE_HUNDRED
        };

        Some(Self {
            ticker: ticker.into(),
            price: last,
            change,
            change_pct,
        })
    }
}

/// Where the price used to value a position came from.
///
/// Lookup failures are not swallowed silently; the fallback is carried up
/// so callers can tell degraded math from live math.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceBasis {
    /// A live quote was available.
    Quoted(PriceQuote),
    /// No quote was available; the purchase price stands in, which values
    /// the position at zero unrealized profit.
    Fallback,
}

impl PriceBasis {
    /// Whether the purchase price was used in place of a live quote.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }
}
