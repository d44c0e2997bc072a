//! Ledger storage.
//!
//! Two persisted collections, open and closed positions, behind a narrow
//! load/save contract. There is no cross-collection transaction; callers
//! issue both writes before returning control.

mod json_store;
mod memory;

pub use json_store::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::model::{ClosedPosition, Position};

/// Storage contract for the two ledger collections.
pub trait LedgerStore: Send + Sync {
    /// Load all open positions. A missing collection loads as empty.
    fn load_open(&self) -> Result<Vec<Position>>;

    /// Load all closed positions. A missing collection loads as empty.
    fn load_closed(&self) -> Result<Vec<ClosedPosition>>;

    /// Replace the open collection.
    fn save_open(&self, positions: &[Position]) -> Result<()>;

    /// Replace the closed collection.
    fn save_closed(&self, closed: &[ClosedPosition]) -> Result<()>;
}
