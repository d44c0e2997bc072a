//! HTTP market-data client.
//!
//! Implements all three collaborator feeds against public market-data
//! endpoints: a daily-chart endpoint for quotes, a search endpoint for
//! company names, a quote-summary endpoint for sector profiles, and a
//! profile/indicator endpoint pair for scanner snapshots.

use super::{CompanyProfile, IndicatorFeed, IndicatorSnapshot, QuoteFeed, ReferenceFeed};
use crate::config::MarketDataConfig;
use crate::error::{Error, Result};
use crate::model::PriceQuote;
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Client for the market-data endpoints.
pub struct MarketDataClient {
    client: Client,
    config: MarketDataConfig,
}

impl MarketDataClient {
    /// Create a new client from configuration.
    pub fn new(config: MarketDataConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Error::market_data(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }
        Ok(response.json().await?)
    }

    fn token_param(&self) -> String {
        match &self.config.api_token {
            Some(token) => format!("&token={token}"),
            None => String::new(),
        }
    }
}

#[async_trait]
impl QuoteFeed for MarketDataClient {
    async fn quote(&self, ticker: &str) -> Result<PriceQuote> {
        let url = format!(
            "{}/{}?interval=1d&range=3mo",
            self.config.chart_url, ticker
        );
        let response: ChartResponse = self.get_json(&url).await?;

        let result = response
            .chart
            .result
            .into_iter()
            .flatten()
            .next()
            .ok_or_else(|| Error::market_data(format!("no chart data for {ticker}")))?;
        let closes: Vec<Decimal> = result
            .indicators
            .quote
            .first()
            .map(|quote| {
                quote
                    .close
                    .iter()
                    .flatten()
                    .filter_map(|close| Decimal::try_from(*close).ok())
                    .collect()
            })
            .unwrap_or_default();

        PriceQuote::from_closes(ticker, &closes)
            .ok_or_else(|| Error::market_data(format!("empty close series for {ticker}")))
    }
}

#[async_trait]
impl ReferenceFeed for MarketDataClient {
    async fn profile(&self, ticker: &str) -> Result<CompanyProfile> {
        let url = format!("{}/{}?modules=assetProfile", self.config.summary_url, ticker);
        let response: SummaryResponse = self.get_json(&url).await?;

        let profile = response
            .quote_summary
            .result
            .into_iter()
            .flatten()
            .next()
            .and_then(|entry| entry.asset_profile)
            .unwrap_or_default();

        Ok(CompanyProfile {
            sector: profile.sector,
            industry: profile.industry,
        })
    }

    async fn company_name(&self, ticker: &str) -> Result<Option<String>> {
        let url = format!("{}?q={}", self.config.search_url, ticker);
        let response: SearchResponse = self.get_json(&url).await?;

        Ok(response
            .quotes
            .into_iter()
            .find(|quote| {
                quote
                    .symbol
                    .as_deref()
                    .is_some_and(|symbol| symbol.eq_ignore_ascii_case(ticker))
            })
            .and_then(|quote| quote.shortname.or(quote.longname)))
    }
}

#[async_trait]
impl IndicatorFeed for MarketDataClient {
    async fn snapshot(&self, ticker: &str) -> Result<IndicatorSnapshot> {
        let token = self.token_param();

        let quote_url = format!("{}/quote?symbol={}{}", self.config.indicator_url, ticker, token);
        let quote: InstantQuote = self.get_json(&quote_url).await?;
        let price = quote
            .current
            .filter(|price| *price > 0.0)
            .and_then(|price| Decimal::try_from(price).ok())
            .ok_or_else(|| Error::market_data(format!("no price for {ticker}")))?;

        let profile_url = format!("{}?symbol={}{}", self.config.profile_url, ticker, token);
        let profile: InstrumentProfile = self.get_json(&profile_url).await?;
        // The profile endpoint reports market cap in millions.
        let market_cap = profile
            .market_capitalization
            .filter(|cap| *cap > 0.0)
            .and_then(|cap| Decimal::try_from(cap * 1_000_000.0).ok())
            .ok_or_else(|| Error::market_data(format!("no market cap for {ticker}")))?;

        let ma_url = format!(
            "{}/indicator?symbol={}&indicator=sma&timeperiod=150{}",
            self.config.indicator_url, ticker, token
        );
        let indicator: IndicatorResponse = self.get_json(&ma_url).await?;
        let ma150 = indicator
            .sma
            .iter()
            .flatten()
            .last()
            .and_then(|value| Decimal::try_from(*value).ok())
            .ok_or_else(|| Error::market_data(format!("no moving average for {ticker}")))?;

        Ok(IndicatorSnapshot {
            price,
            market_cap,
            ma150,
            sector: profile
                .industry
                .unwrap_or_else(|| "Unknown".to_string()),
            name: profile.name.unwrap_or_else(|| ticker.to_string()),
        })
    }
}

// Response payloads, limited to the fields the crate reads.

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: SummaryEnvelope,
}

#[derive(Debug, Deserialize)]
struct SummaryEnvelope {
    result: Option<Vec<SummaryResult>>,
}

#[derive(Debug, Deserialize)]
struct SummaryResult {
    #[serde(rename = "assetProfile")]
    asset_profile: Option<AssetProfile>,
}

#[derive(Debug, Default, Deserialize)]
struct AssetProfile {
    sector: Option<String>,
    industry: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    quotes: Vec<SearchQuote>,
}

#[derive(Debug, Deserialize)]
struct SearchQuote {
    symbol: Option<String>,
    shortname: Option<String>,
    longname: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InstantQuote {
    #[serde(rename = "c")]
    current: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct InstrumentProfile {
    #[serde(rename = "marketCapitalization")]
    market_capitalization: Option<f64>,
    #[serde(rename = "finnhubIndustry")]
    industry: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IndicatorResponse {
    #[serde(default)]
    sma: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(server: &MockServer) -> MarketDataConfig {
        MarketDataConfig {
            chart_url: format!("{}/v8/finance/chart", server.uri()),
            search_url: format!("{}/v1/finance/search", server.uri()),
            summary_url: format!("{}/v10/finance/quoteSummary", server.uri()),
            profile_url: format!("{}/stock/profile2", server.uri()),
            indicator_url: server.uri(),
            api_token: Some("test-token".to_string()),
            timeout_secs: 5,
            quote_ttl_secs: 600,
        }
    }

    #[tokio::test]
    async fn test_quote_derived_from_close_series() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/AAPL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "chart": {
                    "result": [{
                        "indicators": {
                            "quote": [{"close": [170.0, null, 175.5]}]
                        }
                    }]
                }
            })))
            .mount(&server)
            .await;

        let client = MarketDataClient::new(test_config(&server)).unwrap();
        let quote = client.quote("AAPL").await.unwrap();

        assert_eq!(quote.ticker, "AAPL");
        assert_eq!(quote.price, dec!(175.5));
        assert_eq!(quote.change, dec!(5.5));
    }

    #[tokio::test]
    async fn test_quote_without_chart_data_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/ZZZZ"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"chart": {"result": null}})),
            )
            .mount(&server)
            .await;

        let client = MarketDataClient::new(test_config(&server)).unwrap();
        let result = client.quote("ZZZZ").await;
        assert!(matches!(result, Err(Error::MarketData(_))));
    }

    #[tokio::test]
    async fn test_company_name_matches_symbol_case_insensitively() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/finance/search"))
            .and(query_param("q", "aapl"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "quotes": [
                    {"symbol": "AAPL.MX", "shortname": "Apple (Mexico)"},
                    {"symbol": "AAPL", "shortname": "Apple Inc."}
                ]
            })))
            .mount(&server)
            .await;

        let client = MarketDataClient::new(test_config(&server)).unwrap();
        let name = client.company_name("aapl").await.unwrap();
        assert_eq!(name, Some("Apple Inc.".to_string()));
    }

    #[tokio::test]
    async fn test_profile_maps_asset_profile_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v10/finance/quoteSummary/MSFT"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "quoteSummary": {
                    "result": [{
                        "assetProfile": {
                            "sector": "Technology",
                            "industry": "Software - Infrastructure"
                        }
                    }]
                }
            })))
            .mount(&server)
            .await;

        let client = MarketDataClient::new(test_config(&server)).unwrap();
        let profile = client.profile("MSFT").await.unwrap();
        assert_eq!(profile.sector, Some("Technology".to_string()));
        assert_eq!(profile.industry, Some("Software - Infrastructure".to_string()));
    }

    #[tokio::test]
    async fn test_snapshot_combines_three_endpoints() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/quote"))
            .and(query_param("symbol", "NVDA"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"c": 485.75})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/stock/profile2"))
            .and(query_param("symbol", "NVDA"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "marketCapitalization": 1_200_000.0,
                "finnhubIndustry": "Semiconductors",
                "name": "NVIDIA Corporation"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/indicator"))
            .and(query_param("symbol", "NVDA"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"sma": [450.0, 460.0, 470.25]})),
            )
            .mount(&server)
            .await;

        let client = MarketDataClient::new(test_config(&server)).unwrap();
        let snapshot = client.snapshot("NVDA").await.unwrap();

        assert_eq!(snapshot.price, dec!(485.75));
        assert_eq!(snapshot.market_cap, dec!(1_200_000_000_000));
        assert_eq!(snapshot.ma150, dec!(470.25));
        assert_eq!(snapshot.sector, "Semiconductors");
        assert_eq!(snapshot.name, "NVIDIA Corporation");
    }

    #[tokio::test]
    async fn test_snapshot_missing_market_cap_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/quote"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"c": 12.5})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/stock/profile2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = MarketDataClient::new(test_config(&server)).unwrap();
        let result = client.snapshot("TINY").await;
        assert!(matches!(result, Err(Error::MarketData(_))));
    }
}
