//! Aggregate portfolio figures.

use super::Sector;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate view of the whole portfolio.
///
/// `total_profit` is cumulative: unrealized profit on open positions plus
/// realized profit on every closed position, all-time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Invested capital across open positions.
    pub total_invested: Decimal,
    /// Current market value across open positions.
    pub current_value: Decimal,
    /// Unrealized plus realized profit.
    pub total_profit: Decimal,
    /// `total_profit / total_invested * 100`; zero when nothing is invested.
    pub total_profit_pct: Decimal,
    /// Number of open positions.
    pub open_count: usize,
    /// Number of closed positions.
    pub closed_count: usize,
}

/// One sector's share of the open portfolio.
///
/// Notional value is `purchase_price * quantity`; live prices are not used
/// for the distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorSlice {
    /// The sector.
    pub sector: Sector,
    /// Number of open positions in the sector.
    pub count: usize,
    /// Summed notional value.
    pub value: Decimal,
    /// Percentage share of the total notional.
    pub share_pct: Decimal,
}
