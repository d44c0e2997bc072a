//! Position lifecycle management.
//!
//! The lifecycle is two states, open → closed, with deletion as a terminal
//! exit from either state. There is no reopening transition.

use crate::error::{Error, Result};
use crate::market::{ReferenceFeed, resolve_sector};
use crate::model::{ClosedPosition, Position, Sector};
use crate::store::LedgerStore;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Inputs for opening a position.
#[derive(Debug, Clone)]
pub struct OpenRequest {
    /// Ticker symbol.
    pub ticker: String,
    /// Display name.
    pub name: String,
    /// Purchase date.
    pub purchase_date: NaiveDate,
    /// Purchase price per share. Must be positive.
    pub purchase_price: Decimal,
    /// Number of shares. Must be positive.
    pub quantity: u32,
}

/// The portfolio ledger: opens, sells, deletes, and annotates positions.
///
/// Every mutation holds the per-ledger guard across the store's whole
/// read-modify-write cycle, so the open→closed move stays consistent when
/// callers run in parallel.
pub struct Ledger {
    store: Arc<dyn LedgerStore>,
    reference: Arc<dyn ReferenceFeed>,
    guard: Mutex<()>,
}

impl Ledger {
    /// Create a ledger over a store and a reference feed.
    pub fn new(store: Arc<dyn LedgerStore>, reference: Arc<dyn ReferenceFeed>) -> Self {
        Self {
            store,
            reference,
            guard: Mutex::new(()),
        }
    }

    /// Open a new position.
    ///
    /// The sector is resolved through the reference feed once, at creation;
    /// a failed lookup degrades to [`Sector::Unknown`] and never blocks the
    /// open.
    pub async fn open(&self, request: OpenRequest) -> Result<Position> {
        if request.purchase_price <= Decimal::ZERO {
            return Err(Error::invalid_input("purchase price must be positive"));
        }
        if request.quantity == 0 {
            return Err(Error::invalid_input("quantity must be positive"));
        }

        // Resolved before taking the guard; the network stays outside the
        // ledger's critical section.
        let sector = match self.reference.profile(&request.ticker).await {
            Ok(profile) => resolve_sector(&profile),
            Err(e) => {
                warn!("sector lookup failed for {}: {}", request.ticker, e);
                Sector::Unknown
            }
        };

        let position = Position {
            id: Uuid::new_v4(),
            ticker: request.ticker,
            name: request.name,
            purchase_date: request.purchase_date,
            purchase_price: request.purchase_price,
            quantity: request.quantity,
            sector,
        };

        let _guard = self.guard.lock().await;
        let mut open = self.store.load_open()?;
        open.push(position.clone());
        self.store.save_open(&open)?;

        info!(
            "opened {} x{} @ {}",
            position.ticker, position.quantity, position.purchase_price
        );
        Ok(position)
    }

    /// Sell an open position, moving it into the closed collection with its
    /// realized figures.
    ///
    /// Returns `Ok(None)` when no open position has the given id; neither
    /// collection is touched in that case.
    pub async fn sell(
        &self,
        id: Uuid,
        sell_date: NaiveDate,
        sell_price: Decimal,
    ) -> Result<Option<ClosedPosition>> {
        if sell_price < Decimal::ZERO {
            return Err(Error::invalid_input("sell price must be non-negative"));
        }

        let _guard = self.guard.lock().await;
        let mut open = self.store.load_open()?;
        let Some(index) = open.iter().position(|p| p.id == id) else {
            debug!("sell: position {} not found", id);
            return Ok(None);
        };

        let position = open.remove(index);
        let closed = position.close(sell_date, sell_price);
        let mut closed_set = self.store.load_closed()?;
        closed_set.push(closed.clone());

        self.store.save_open(&open)?;
        self.store.save_closed(&closed_set)?;

        info!(
            "sold {} x{} @ {} ({} realized)",
            closed.position.ticker, closed.position.quantity, sell_price, closed.realized_profit
        );
        Ok(Some(closed))
    }

    /// Delete an open position by id. Idempotent; returns whether anything
    /// was removed.
    pub async fn delete_open(&self, id: Uuid) -> Result<bool> {
        let _guard = self.guard.lock().await;
        let mut open = self.store.load_open()?;
        let before = open.len();
        open.retain(|p| p.id != id);
        self.store.save_open(&open)?;
        Ok(open.len() != before)
    }

    /// Delete a closed position by id. Idempotent; returns whether anything
    /// was removed.
    pub async fn delete_closed(&self, id: Uuid) -> Result<bool> {
        let _guard = self.guard.lock().await;
        let mut closed = self.store.load_closed()?;
        let before = closed.len();
        closed.retain(|c| c.id() != id);
        self.store.save_closed(&closed)?;
        Ok(closed.len() != before)
    }

    /// Overwrite the reflection note on a closed position. Silent no-op when
    /// the id is unknown; returns whether a note was written.
    pub async fn annotate(&self, id: Uuid, note: impl Into<String>) -> Result<bool> {
        let _guard = self.guard.lock().await;
        let mut closed = self.store.load_closed()?;
        let Some(entry) = closed.iter_mut().find(|c| c.id() == id) else {
            debug!("annotate: closed position {} not found", id);
            return Ok(false);
        };
        entry.note = Some(note.into());
        self.store.save_closed(&closed)?;
        Ok(true)
    }

    /// Current open positions.
    pub async fn open_positions(&self) -> Result<Vec<Position>> {
        self.store.load_open()
    }

    /// Current closed positions.
    pub async fn closed_positions(&self) -> Result<Vec<ClosedPosition>> {
        self.store.load_closed()
    }
}
