//! Periodic summary recomputation.
//!
//! A best-effort refresh: each tick recomputes the portfolio summary and
//! publishes it to watchers. Computations are versioned so a slow one that
//! finishes after a newer one has already published is discarded instead of
//! overwriting fresher state.

use crate::error::Result;
use crate::ledger::Ledger;
use crate::model::PortfolioSummary;
use crate::valuation::ValuationEngine;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// A published summary with its version.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryFrame {
    /// Monotonic computation version. Zero is the initial empty frame.
    pub generation: u64,
    /// The computed summary.
    pub summary: PortfolioSummary,
    /// When the computation finished.
    pub computed_at: DateTime<Utc>,
}

/// Periodic portfolio summary refresher.
pub struct SummaryRefresher {
    ledger: Arc<Ledger>,
    valuation: Arc<ValuationEngine>,
    generation: AtomicU64,
    published: watch::Sender<SummaryFrame>,
}

impl SummaryRefresher {
    /// Create a refresher over a ledger and valuation engine.
    pub fn new(ledger: Arc<Ledger>, valuation: Arc<ValuationEngine>) -> Self {
        let (published, _) = watch::channel(SummaryFrame {
            generation: 0,
            summary: PortfolioSummary::default(),
            computed_at: Utc::now(),
        });
        Self {
            ledger,
            valuation,
            generation: AtomicU64::new(0),
            published,
        }
    }

    /// Subscribe to published summary frames.
    pub fn subscribe(&self) -> watch::Receiver<SummaryFrame> {
        self.published.subscribe()
    }

    /// Recompute the summary once and publish it, unless a newer
    /// computation already published while this one was in flight.
    ///
    /// Returns the frame when it was published, `None` when it was stale.
    pub async fn refresh_once(&self) -> Result<Option<SummaryFrame>> {
        // The version is taken before the lookups start; any computation
        // that began later owns a higher one.
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let open = self.ledger.open_positions().await?;
        let closed = self.ledger.closed_positions().await?;
        let priced = self.valuation.price_positions(&open).await;
        let summary = ValuationEngine::summarize(&priced, &closed);

        let frame = SummaryFrame {
            generation,
            summary,
            computed_at: Utc::now(),
        };
        Ok(self.publish(frame))
    }

    fn publish(&self, frame: SummaryFrame) -> Option<SummaryFrame> {
        let mut published = None;
        self.published.send_if_modified(|current| {
            if frame.generation > current.generation {
                *current = frame.clone();
                published = Some(frame.clone());
                true
            } else {
                false
            }
        });
        if published.is_none() {
            debug!("discarding stale summary generation {}", frame.generation);
        }
        published
    }

    /// Run the refresh loop on a fixed cadence until the task is aborted.
    /// An interval of zero disables the loop.
    pub async fn run(self: Arc<Self>, interval_secs: u64) {
        if interval_secs == 0 {
            return;
        }

        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            if let Err(e) = self.refresh_once().await {
                warn!("summary refresh failed: {}", e);
            }
        }
    }
}
