//! Portfolio valuation.
//!
//! Pure computation over ledger snapshots plus live prices. Nothing here
//! mutates the ledger; every function is safe to call repeatedly.

use crate::market::{QuoteCache, QuoteFeed};
use crate::model::{ClosedPosition, PortfolioSummary, Position, PriceBasis, SectorSlice};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::warn;

/// Share threshold above which a sector counts as concentrated.
const CONCENTRATION_LIMIT_PCT: u32 = 40;

/// How many recent sales feed the average-return insight.
const RECENT_SALES_WINDOW: usize = 5;

/// An open position paired with the price used to value it.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedPosition {
    /// The open position.
    pub position: Position,
    /// Where its valuation price came from.
    pub basis: PriceBasis,
}

impl PricedPosition {
    /// The price used for valuation.
    pub fn current_price(&self) -> Decimal {
        match &self.basis {
            PriceBasis::Quoted(quote) => quote.price,
            PriceBasis::Fallback => self.position.purchase_price,
        }
    }

    /// Current market value of the position.
    pub fn current_value(&self) -> Decimal {
        self.current_price() * Decimal::from(self.position.quantity)
    }

    /// Unrealized profit. Zero by construction when the basis is a fallback.
    pub fn unrealized_profit(&self) -> Decimal {
        self.current_value() - self.position.invested()
    }
}

/// Dashboard insights derived from the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioInsights {
    /// The top sector, when its share exceeds the concentration threshold.
    pub concentration: Option<SectorSlice>,
    /// Average realized return percentage over the most recent sales.
    pub recent_sales_avg_return_pct: Option<Decimal>,
}

/// Valuation engine: resolves prices and folds ledger snapshots into
/// aggregate figures.
pub struct ValuationEngine {
    quotes: Arc<dyn QuoteFeed>,
    cache: Arc<QuoteCache>,
}

impl ValuationEngine {
    /// Create an engine over a quote feed and its cache.
    pub fn new(quotes: Arc<dyn QuoteFeed>, cache: Arc<QuoteCache>) -> Self {
        Self { quotes, cache }
    }

    /// Resolve a price basis for every open position.
    ///
    /// A failed lookup degrades that position to [`PriceBasis::Fallback`]
    /// rather than failing the whole valuation.
    pub async fn price_positions(&self, positions: &[Position]) -> Vec<PricedPosition> {
        let mut priced = Vec::with_capacity(positions.len());
        for position in positions {
            let basis = self.resolve_basis(&position.ticker).await;
            priced.push(PricedPosition {
                position: position.clone(),
                basis,
            });
        }
        priced
    }

    async fn resolve_basis(&self, ticker: &str) -> PriceBasis {
        if let Some(quote) = self.cache.get(ticker) {
            return PriceBasis::Quoted(quote);
        }
        match self.quotes.quote(ticker).await {
            Ok(quote) => {
                self.cache.put(quote.clone());
                PriceBasis::Quoted(quote)
            }
            Err(e) => {
                warn!("price lookup failed for {}: {}; valuing at cost", ticker, e);
                PriceBasis::Fallback
            }
        }
    }

    /// Fold priced open positions and the closed collection into the
    /// aggregate summary.
    ///
    /// Realized profit is cumulative across every closed position, all-time.
    pub fn summarize(priced: &[PricedPosition], closed: &[ClosedPosition]) -> PortfolioSummary {
        let mut total_invested = Decimal::ZERO;
        let mut current_value = Decimal::ZERO;
        let mut total_profit = Decimal::ZERO;

        for entry in priced {
            total_invested += entry.position.invested();
            current_value += entry.current_value();
            total_profit += entry.unrealized_profit();
        }
        for sale in closed {
            total_profit += sale.realized_profit;
        }

        let total_profit_pct = if total_invested.is_zero() {
            Decimal::ZERO
        } else {
            total_profit / total_invested * Decimal::ONE_HUNDRED
        };

        PortfolioSummary {
            total_invested,
            current_value,
            total_profit,
            total_profit_pct,
            open_count: priced.len(),
            closed_count: closed.len(),
        }
    }

    /// Group open positions by sector.
    ///
    /// Notional value is `purchase_price * quantity`; slices come back in
    /// descending share order, ties keeping first-seen order.
    pub fn sector_distribution(positions: &[Position]) -> Vec<SectorSlice> {
        let mut slices: Vec<SectorSlice> = Vec::new();
        for position in positions {
            match slices.iter_mut().find(|s| s.sector == position.sector) {
                Some(slice) => {
                    slice.count += 1;
                    slice.value += position.invested();
                }
                None => slices.push(SectorSlice {
                    sector: position.sector,
                    count: 1,
                    value: position.invested(),
                    share_pct: Decimal::ZERO,
                }),
            }
        }

        let total: Decimal = slices.iter().map(|s| s.value).sum();
        if !total.is_zero() {
            for slice in &mut slices {
                slice.share_pct = slice.value / total * Decimal::ONE_HUNDRED;
            }
        }

        // Stable sort keeps insertion order for equal shares.
        slices.sort_by(|a, b| b.share_pct.cmp(&a.share_pct));
        slices
    }

    /// Derive dashboard insights from the ledger.
    pub fn insights(positions: &[Position], closed: &[ClosedPosition]) -> PortfolioInsights {
        let distribution = Self::sector_distribution(positions);
        let concentration = distribution
            .into_iter()
            .next()
            .filter(|top| top.share_pct > Decimal::from(CONCENTRATION_LIMIT_PCT));

        let recent: Vec<&ClosedPosition> =
            closed.iter().rev().take(RECENT_SALES_WINDOW).collect();
        let recent_sales_avg_return_pct = if recent.is_empty() {
            None
        } else {
            let sum: Decimal = recent.iter().map(|c| c.realized_profit_pct).sum();
            Some(sum / Decimal::from(recent.len() as u32))
        };

        PortfolioInsights {
            concentration,
            recent_sales_avg_return_pct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::market::MockQuoteFeed;
    use crate::model::{PriceQuote, Sector};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn position(ticker: &str, price: Decimal, quantity: u32, sector: Sector) -> Position {
        Position {
            id: Uuid::new_v4(),
            ticker: ticker.to_string(),
            name: ticker.to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            purchase_price: price,
            quantity,
            sector,
        }
    }

    fn quote(ticker: &str, price: Decimal) -> PriceQuote {
        PriceQuote {
            ticker: ticker.to_string(),
            price,
            change: Decimal::ZERO,
            change_pct: Decimal::ZERO,
        }
    }

    fn engine_with_quote(price: Decimal) -> ValuationEngine {
        let mut feed = MockQuoteFeed::new();
        feed.expect_quote().returning(move |t| Ok(quote(t, price)));
        ValuationEngine::new(Arc::new(feed), Arc::new(QuoteCache::new(600)))
    }

    #[tokio::test]
    async fn test_summary_with_live_quote() {
        let engine = engine_with_quote(dec!(175.50));
        let positions = vec![position("AAPL", dec!(150), 10, Sector::Technology)];

        let priced = engine.price_positions(&positions).await;
        let summary = ValuationEngine::summarize(&priced, &[]);

        assert_eq!(summary.total_invested, dec!(1500));
        assert_eq!(summary.current_value, dec!(1755));
        assert_eq!(summary.total_profit, dec!(255));
        assert_eq!(summary.total_profit_pct, dec!(17));
        assert_eq!(summary.open_count, 1);
        assert_eq!(summary.closed_count, 0);
    }

    #[tokio::test]
    async fn test_failed_lookup_falls_back_to_cost() {
        let mut feed = MockQuoteFeed::new();
        feed.expect_quote()
            .returning(|_| Err(Error::market_data("endpoint down")));
        let engine = ValuationEngine::new(Arc::new(feed), Arc::new(QuoteCache::new(600)));
        let positions = vec![position("GOOGL", dec!(142.80), 5, Sector::Technology)];

        let priced = engine.price_positions(&positions).await;
        assert!(priced[0].basis.is_fallback());
        assert_eq!(priced[0].unrealized_profit(), Decimal::ZERO);

        let summary = ValuationEngine::summarize(&priced, &[]);
        assert_eq!(summary.total_invested, dec!(714));
        assert_eq!(summary.current_value, dec!(714));
        assert_eq!(summary.total_profit, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_cache_short_circuits_the_feed() {
        let mut feed = MockQuoteFeed::new();
        feed.expect_quote()
            .times(1)
            .returning(|t| Ok(quote(t, dec!(100))));
        let engine = ValuationEngine::new(Arc::new(feed), Arc::new(QuoteCache::new(600)));
        let positions = vec![position("MSFT", dec!(90), 1, Sector::Technology)];

        engine.price_positions(&positions).await;
        let priced = engine.price_positions(&positions).await;
        assert_eq!(priced[0].current_price(), dec!(100));
    }

    #[test]
    fn test_summary_includes_realized_profit() {
        let closed = vec![
            position("TSLA", dec!(200), 2, Sector::Consumer)
                .close(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), dec!(250)),
        ];
        let summary = ValuationEngine::summarize(&[], &closed);

        assert_eq!(summary.total_invested, Decimal::ZERO);
        assert_eq!(summary.total_profit, dec!(100));
        // Zero invested never divides; the percentage is defined as zero.
        assert_eq!(summary.total_profit_pct, Decimal::ZERO);
        assert_eq!(summary.closed_count, 1);
    }

    #[test]
    fn test_equal_notional_sectors_split_evenly() {
        let positions = vec![
            position("XOM", dec!(100), 5, Sector::Energy),
            position("JPM", dec!(50), 10, Sector::Financials),
        ];

        let slices = ValuationEngine::sector_distribution(&positions);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].sector, Sector::Energy);
        assert_eq!(slices[0].share_pct, dec!(50));
        assert_eq!(slices[1].sector, Sector::Financials);
        assert_eq!(slices[1].share_pct, dec!(50));
    }

    #[test]
    fn test_distribution_sorts_by_descending_share() {
        let positions = vec![
            position("JNJ", dec!(100), 1, Sector::Healthcare),
            position("AAPL", dec!(100), 3, Sector::Technology),
        ];

        let slices = ValuationEngine::sector_distribution(&positions);
        assert_eq!(slices[0].sector, Sector::Technology);
        assert_eq!(slices[0].share_pct, dec!(75));
        assert_eq!(slices[0].count, 1);
    }

    #[test]
    fn test_empty_portfolio_distribution() {
        assert_eq!(ValuationEngine::sector_distribution(&[]), vec![]);
    }

    #[test]
    fn test_concentration_insight_flags_heavy_sector() {
        let positions = vec![
            position("AAPL", dec!(100), 9, Sector::Technology),
            position("JPM", dec!(100), 1, Sector::Financials),
        ];

        let insights = ValuationEngine::insights(&positions, &[]);
        let top = insights.concentration.unwrap();
        assert_eq!(top.sector, Sector::Technology);
        assert_eq!(top.share_pct, dec!(90));
    }

    #[test]
    fn test_no_concentration_below_threshold() {
        let positions = vec![
            position("AAPL", dec!(100), 1, Sector::Technology),
            position("JPM", dec!(100), 1, Sector::Financials),
            position("XOM", dec!(100), 1, Sector::Energy),
        ];

        let insights = ValuationEngine::insights(&positions, &[]);
        assert_eq!(insights.concentration, None);
    }

    #[test]
    fn test_recent_sales_average_return() {
        let sell_date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let closed = vec![
            position("A", dec!(100), 1, Sector::Other).close(sell_date, dec!(110)),
            position("B", dec!(100), 1, Sector::Other).close(sell_date, dec!(130)),
        ];

        let insights = ValuationEngine::insights(&[], &closed);
        assert_eq!(insights.recent_sales_avg_return_pct, Some(dec!(20)));
    }
}
