//! Main tracker module.
//!
//! This module contains the `Tracker` struct that wires the ledger,
//! market-data feeds, valuation engine, scanner, and refresher together
//! behind one high-level API.

use crate::config::Config;
use crate::error::Result;
use crate::ledger::{Ledger, OpenRequest};
use crate::market::{
    IndicatorFeed, MarketDataClient, QuoteCache, QuoteFeed, ReferenceFeed,
};
use crate::model::{ClosedPosition, PortfolioSummary, Position, SectorSlice};
use crate::refresh::{SummaryFrame, SummaryRefresher};
use crate::scanner::{ScanReport, Scanner};
use crate::store::{JsonFileStore, LedgerStore};
use crate::valuation::{PortfolioInsights, ValuationEngine};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::warn;
use uuid::Uuid;

/// The portfolio tracker.
pub struct Tracker {
    config: Config,
    ledger: Arc<Ledger>,
    valuation: Arc<ValuationEngine>,
    reference: Arc<dyn ReferenceFeed>,
    scanner: Scanner,
    refresher: Arc<SummaryRefresher>,
}

impl Tracker {
    /// Create a tracker with the file-backed store and HTTP feeds.
    pub fn new(config: Config) -> Result<Self> {
        let store = Arc::new(JsonFileStore::new(&config.storage)?);
        let client = Arc::new(MarketDataClient::new(config.market_data.clone())?);
        Ok(Self::with_parts(
            config,
            store,
            client.clone(),
            client.clone(),
            client,
        ))
    }

    /// Create a tracker from explicit parts. Tests inject a memory store
    /// and mock feeds here.
    pub fn with_parts(
        config: Config,
        store: Arc<dyn LedgerStore>,
        quotes: Arc<dyn QuoteFeed>,
        reference: Arc<dyn ReferenceFeed>,
        indicators: Arc<dyn IndicatorFeed>,
    ) -> Self {
        let cache = Arc::new(QuoteCache::new(config.market_data.quote_ttl_secs));
        let ledger = Arc::new(Ledger::new(store, reference.clone()));
        let valuation = Arc::new(ValuationEngine::new(quotes, cache));
        let scanner = Scanner::new(indicators, &config.scanner);
        let refresher = Arc::new(SummaryRefresher::new(ledger.clone(), valuation.clone()));

        Self {
            config,
            ledger,
            valuation,
            reference,
            scanner,
            refresher,
        }
    }

    /// Open a new position.
    ///
    /// An empty display name is resolved through the reference feed,
    /// failing soft to the ticker symbol.
    pub async fn open_position(&self, mut request: OpenRequest) -> Result<Position> {
        if request.name.trim().is_empty() {
            request.name = match self.reference.company_name(&request.ticker).await {
                Ok(Some(name)) => name,
                Ok(None) => request.ticker.clone(),
                Err(e) => {
                    warn!("name lookup failed for {}: {}", request.ticker, e);
                    request.ticker.clone()
                }
            };
        }
        self.ledger.open(request).await
    }

    /// Sell an open position. `None` when the id is unknown.
    pub async fn sell_position(
        &self,
        id: Uuid,
        sell_date: NaiveDate,
        sell_price: Decimal,
    ) -> Result<Option<ClosedPosition>> {
        self.ledger.sell(id, sell_date, sell_price).await
    }

    /// Delete an open position. Idempotent.
    pub async fn delete_position(&self, id: Uuid) -> Result<bool> {
        self.ledger.delete_open(id).await
    }

    /// Delete a closed position. Idempotent.
    pub async fn delete_closed_position(&self, id: Uuid) -> Result<bool> {
        self.ledger.delete_closed(id).await
    }

    /// Attach or overwrite the reflection note on a closed position.
    pub async fn annotate_sale(&self, id: Uuid, note: impl Into<String>) -> Result<bool> {
        self.ledger.annotate(id, note).await
    }

    /// Current open positions.
    pub async fn open_positions(&self) -> Result<Vec<Position>> {
        self.ledger.open_positions().await
    }

    /// Current closed positions.
    pub async fn closed_positions(&self) -> Result<Vec<ClosedPosition>> {
        self.ledger.closed_positions().await
    }

    /// Compute the portfolio summary with current prices.
    pub async fn summary(&self) -> Result<PortfolioSummary> {
        let open = self.ledger.open_positions().await?;
        let closed = self.ledger.closed_positions().await?;
        let priced = self.valuation.price_positions(&open).await;
        Ok(ValuationEngine::summarize(&priced, &closed))
    }

    /// Sector distribution over open positions.
    pub async fn sector_distribution(&self) -> Result<Vec<SectorSlice>> {
        let open = self.ledger.open_positions().await?;
        Ok(ValuationEngine::sector_distribution(&open))
    }

    /// Dashboard insights.
    pub async fn insights(&self) -> Result<PortfolioInsights> {
        let open = self.ledger.open_positions().await?;
        let closed = self.ledger.closed_positions().await?;
        Ok(ValuationEngine::insights(&open, &closed))
    }

    /// Run a scan over the built-in universe.
    pub async fn scan(&self) -> ScanReport {
        self.scanner.scan().await
    }

    /// Subscribe to periodically refreshed summaries.
    pub fn subscribe_summary(&self) -> watch::Receiver<SummaryFrame> {
        self.refresher.subscribe()
    }

    /// Spawn the periodic summary refresher onto the runtime.
    pub fn spawn_refresher(&self) -> JoinHandle<()> {
        let refresher = self.refresher.clone();
        let interval_secs = self.config.refresh.interval_secs;
        tokio::spawn(refresher.run(interval_secs))
    }
}
