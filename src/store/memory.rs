//! In-memory ledger storage.

use super::LedgerStore;
use crate::error::{Error, Result};
use crate::model::{ClosedPosition, Position};
use std::sync::Mutex;

/// Ledger store backed by process memory. Useful for tests and ephemeral
/// sessions; contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    open: Mutex<Vec<Position>>,
    closed: Mutex<Vec<ClosedPosition>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for MemoryStore {
    fn load_open(&self) -> Result<Vec<Position>> {
        let open = self
            .open
            .lock()
            .map_err(|_| Error::storage("open collection lock poisoned"))?;
        Ok(open.clone())
    }

    fn load_closed(&self) -> Result<Vec<ClosedPosition>> {
        let closed = self
            .closed
            .lock()
            .map_err(|_| Error::storage("closed collection lock poisoned"))?;
        Ok(closed.clone())
    }

    fn save_open(&self, positions: &[Position]) -> Result<()> {
        let mut open = self
            .open
            .lock()
            .map_err(|_| Error::storage("open collection lock poisoned"))?;
        *open = positions.to_vec();
        Ok(())
    }

    fn save_closed(&self, closed: &[ClosedPosition]) -> Result<()> {
        let mut guard = self
            .closed
            .lock()
            .map_err(|_| Error::storage("closed collection lock poisoned"))?;
        *guard = closed.to_vec();
        Ok(())
    }
}
