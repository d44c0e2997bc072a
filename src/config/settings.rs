//! Configuration settings for folio.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Market data endpoint configuration.
    pub market_data: MarketDataConfig,
    /// Ledger storage configuration.
    pub storage: StorageConfig,
    /// Summary refresh configuration.
    pub refresh: RefreshConfig,
    /// Scanner rule configuration.
    pub scanner: ScannerConfig,
}

impl Config {
    /// Load configuration from file, returning default if file doesn't exist or fails.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from file.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Market data endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketDataConfig {
    /// Daily-chart endpoint base URL (close series per ticker).
    pub chart_url: String,
    /// Symbol-search endpoint base URL (company name lookup).
    pub search_url: String,
    /// Quote-summary endpoint base URL (sector/industry classification).
    pub summary_url: String,
    /// Company-profile endpoint base URL (market cap, scanner).
    pub profile_url: String,
    /// Technical-indicator endpoint base URL (moving averages).
    pub indicator_url: String,
    /// API token for the profile/indicator endpoints (optional).
    pub api_token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Quote cache time-to-live in seconds.
    pub quote_ttl_secs: u64,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            chart_url: "https://query1.finance.yahoo.com/v8/finance/chart".to_string(),
            search_url: "https://query1.finance.yahoo.com/v1/finance/search".to_string(),
            summary_url: "https://query2.finance.yahoo.com/v10/finance/quoteSummary".to_string(),
            profile_url: "https://finnhub.io/api/v1/stock/profile2".to_string(),
            indicator_url: "https://finnhub.io/api/v1".to_string(),
            api_token: None,
            timeout_secs: 30,
            quote_ttl_secs: 600,
        }
    }
}

/// Ledger storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage key; the open collection lives in `<key>.json`, the closed
    /// one in `<key>-sold.json`.
    pub key: String,
    /// Data directory override. When unset, the per-user data dir is used.
    pub data_dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: "portfolio".to_string(),
            data_dir: None,
        }
    }
}

/// Summary refresh configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Recompute interval in seconds (0 to disable).
    pub interval_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self { interval_secs: 10 }
    }
}

/// Scanner rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Maximum percentage deviation from the 150-day moving average.
    pub max_deviation_pct: f64,
    /// Minimum market capitalization in dollars.
    pub min_market_cap: f64,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            max_deviation_pct: 5.0,
            min_market_cap: 1_000_000_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.storage.key, "portfolio");
        assert_eq!(parsed.refresh.interval_secs, 10);
        assert_eq!(parsed.market_data.quote_ttl_secs, 600);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: Config = toml::from_str("[storage]\nkey = \"demo\"\n").unwrap();
        assert_eq!(parsed.storage.key, "demo");
        assert_eq!(parsed.scanner.max_deviation_pct, 5.0);
    }
}
