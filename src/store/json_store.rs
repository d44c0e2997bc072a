//! File-backed ledger storage.

use super::LedgerStore;
use crate::config::StorageConfig;
use crate::error::Result;
use crate::model::{ClosedPosition, Position};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Ledger store keeping each collection in a pretty-printed JSON file.
///
/// The open collection lives in `<key>.json`, the closed one in
/// `<key>-sold.json` under the data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    open_path: PathBuf,
    closed_path: PathBuf,
}

impl JsonFileStore {
    /// Create a store from configuration, resolving the per-user data
    /// directory when none is configured.
    pub fn new(config: &StorageConfig) -> Result<Self> {
        let dir = match &config.data_dir {
            Some(dir) => dir.clone(),
            None => crate::config::data_dir()?,
        };
        Ok(Self::at(dir, &config.key))
    }

    /// Create a store rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>, key: &str) -> Self {
        let dir = dir.into();
        Self {
            open_path: dir.join(format!("{key}.json")),
            closed_path: dir.join(format!("{key}-sold.json")),
        }
    }

    fn read<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn write<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(records)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl LedgerStore for JsonFileStore {
    fn load_open(&self) -> Result<Vec<Position>> {
        Self::read(&self.open_path)
    }

    fn load_closed(&self) -> Result<Vec<ClosedPosition>> {
        Self::read(&self.closed_path)
    }

    fn save_open(&self, positions: &[Position]) -> Result<()> {
        Self::write(&self.open_path, positions)
    }

    fn save_closed(&self, closed: &[ClosedPosition]) -> Result<()> {
        Self::write(&self.closed_path, closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sector;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn test_position() -> Position {
        Position {
            id: Uuid::new_v4(),
            ticker: "NVDA".to_string(),
            name: "NVIDIA Corporation".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            purchase_price: dec!(485.75),
            quantity: 2,
            sector: Sector::Technology,
        }
    }

    #[test]
    fn test_missing_files_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::at(dir.path(), "portfolio");
        assert_eq!(store.load_open().unwrap(), vec![]);
        assert_eq!(store.load_closed().unwrap(), vec![]);
    }

    #[test]
    fn test_open_collection_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::at(dir.path(), "portfolio");

        let positions = vec![test_position()];
        store.save_open(&positions).unwrap();
        assert_eq!(store.load_open().unwrap(), positions);
        assert!(dir.path().join("portfolio.json").exists());
    }

    #[test]
    fn test_closed_collection_uses_sold_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::at(dir.path(), "portfolio");

        let closed =
            vec![test_position().close(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), dec!(500))];
        store.save_closed(&closed).unwrap();
        assert_eq!(store.load_closed().unwrap(), closed);
        assert!(dir.path().join("portfolio-sold.json").exists());
    }

    #[test]
    fn test_collections_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::at(dir.path(), "portfolio");

        store.save_open(&[test_position()]).unwrap();
        assert_eq!(store.load_closed().unwrap(), vec![]);
    }
}
