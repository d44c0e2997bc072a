//! Domain model for the portfolio ledger.

mod position;
mod quote;
mod summary;

pub use position::{ClosedPosition, Position, Sector};
pub use quote::{PriceBasis, PriceQuote};
pub use summary::{PortfolioSummary, SectorSlice};
