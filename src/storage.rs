use crate::errors::StoreError;
use crate::models::DayIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

pub const KEY_PREFIX: &str = "workout.week.";

/// Minimal string key-value capability the tracker persists through.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store. It is also the document written to disk after each mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStore {
    pub entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

pub fn day_key(day: DayIndex) -> String {
    format!("{KEY_PREFIX}day{day}")
}

pub fn week_start_key() -> String {
    format!("{KEY_PREFIX}weekStart")
}

/// Day-indexed view over any [`KeyValueStore`], with every key namespaced under
/// [`KEY_PREFIX`].
pub trait WeekStorage: KeyValueStore {
    fn get_day(&self, day: DayIndex) -> Result<Option<String>, StoreError> {
        self.get(&day_key(day))
    }

    fn set_day(&mut self, day: DayIndex, raw: String) -> Result<(), StoreError> {
        self.set(&day_key(day), raw)
    }

    fn remove_day(&mut self, day: DayIndex) -> Result<(), StoreError> {
        self.remove(&day_key(day))
    }

    fn week_start(&self) -> Result<Option<String>, StoreError> {
        self.get(&week_start_key())
    }

    fn set_week_start(&mut self, date: String) -> Result<(), StoreError> {
        self.set(&week_start_key(), date)
    }
}

impl<S: KeyValueStore + ?Sized> WeekStorage for S {}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/workout.json"))
}

/// Reads the store document. A missing file is an empty store; anything else
/// that prevents reading it is reported rather than replaced with defaults.
pub async fn load_data(path: &Path) -> Result<MemoryStore, StoreError> {
    match fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes).map_err(|err| {
            error!("failed to parse data file {}: {err}", path.display());
            StoreError::Corrupt(err.to_string())
        }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!("no data file at {}, starting empty", path.display());
            Ok(MemoryStore::default())
        }
        Err(err) => {
            error!("failed to read data file {}: {err}", path.display());
            Err(err.into())
        }
    }
}

pub async fn persist_data(path: &Path, data: &MemoryStore) -> Result<(), StoreError> {
    let payload =
        serde_json::to_vec_pretty(data).map_err(|err| StoreError::Unavailable(err.to_string()))?;
    fs::write(path, payload).await.map_err(|err| {
        error!("failed to write data file {}: {err}", path.display());
        StoreError::from(err)
    })?;
    Ok(())
}
