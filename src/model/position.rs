//! Open and closed portfolio positions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sector classification for a holding.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Technology,
    Financials,
    Energy,
    Healthcare,
    Industrials,
    Consumer,
    Other,
    #[default]
    Unknown,
}

impl Sector {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Financials => "Financials",
            Self::Energy => "Energy",
            Self::Healthcare => "Healthcare",
            Self::Industrials => "Industrials",
            Self::Consumer => "Consumer",
            Self::Other => "Other",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An open position in the portfolio.
///
/// Membership in the open collection is what makes a position "active";
/// there is no separate flag to keep in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Unique position id.
    pub id: Uuid,
    /// Ticker symbol (e.g. "AAPL").
    pub ticker: String,
    /// Display name.
    pub name: String,
    /// Purchase date.
    pub purchase_date: NaiveDate,
    /// Purchase price per share. Strictly positive.
    pub purchase_price: Decimal,
    /// Number of shares. Strictly positive.
    pub quantity: u32,
    /// Sector classification. Resolved once at creation, never refetched.
    #[serde(default)]
    pub sector: Sector,
}

impl Position {
    /// Invested capital for this position.
    pub fn invested(&self) -> Decimal {
        self.purchase_price * Decimal::from(self.quantity)
    }

    /// Close this position at the given date and price, deriving the
    /// realized figures.
    pub fn close(&self, sell_date: NaiveDate, sell_price: Decimal) -> ClosedPosition {
        let per_share = sell_price - self.purchase_price;
        let realized_profit = per_share * Decimal::from(self.quantity);
        let realized_profit_pct = if self.purchase_price.is_zero() {
            Decimal::ZERO
        } else {
            per_share / self.purchase_price * Decimal::ONE_HUNDRED
        };
        let holding_days = sell_date.signed_duration_since(self.purchase_date).num_days();

        ClosedPosition {
            position: self.clone(),
            sell_date,
            sell_price,
            realized_profit,
            realized_profit_pct,
            holding_days,
            note: None,
        }
    }
}

/// A closed (sold) position with its realized figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedPosition {
    /// The position as it was when open.
    #[serde(flatten)]
    pub position: Position,
    /// Sale date.
    pub sell_date: NaiveDate,
    /// Sale price per share. Non-negative.
    pub sell_price: Decimal,
    /// Realized profit: `(sell - purchase) * quantity`.
    pub realized_profit: Decimal,
    /// Realized profit percentage: `(sell - purchase) / purchase * 100`.
    pub realized_profit_pct: Decimal,
    /// Holding period in whole days.
    pub holding_days: i64,
    /// Free-text reflection note, editable after the sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ClosedPosition {
    /// Id of the underlying position.
    pub fn id(&self) -> Uuid {
        self.position.id
    }
}
