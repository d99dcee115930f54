//! Persisted timestamp store.
//!
//! The daily and monthly gates remember when they last fired through a tiny
//! key-value store of timestamps. The store is injected as a trait so the
//! gate logic can be tested against an in-memory fake with a fixed clock.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::warn;

/// Key-value store of named timestamps.
///
/// A missing key means "never" - the gates treat it as infinitely in the
/// past, not as an error.
pub trait TimestampStore {
    /// Returns the timestamp stored under `key`, if any.
    fn get(&self, key: &str) -> Option<DateTime<Utc>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: DateTime<Utc>) -> Result<()>;
}

/// JSON-file-backed store.
///
/// The whole map is loaded once at startup and rewritten on every set.
/// Writes are rare (at most a handful per day), so this is plenty.
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, DateTime<Utc>>,
}

impl FileStore {
    /// Opens the store at `path`, loading any existing entries.
    ///
    /// A missing file starts an empty store (first run). An unreadable or
    /// unparsable file is logged and also starts empty - losing the
    /// timestamps only means the next refresh re-rolls a day early.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_entries(&path).unwrap_or_default();
        Self { path, entries }
    }
}

/// Reads and parses the state file, logging any failure.
fn load_entries(path: &Path) -> Option<HashMap<String, DateTime<Utc>>> {
    if !path.exists() {
        return None;
    }
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("failed to read state file {}: {}", path.display(), e);
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(entries) => Some(entries),
        Err(e) => {
            warn!("ignoring corrupt state file {}: {}", path.display(), e);
            None
        }
    }
}

impl TimestampStore for FileStore {
    fn get(&self, key: &str) -> Option<DateTime<Utc>> {
        self.entries.get(key).copied()
    }

    fn set(&mut self, key: &str, value: DateTime<Utc>) -> Result<()> {
        self.entries.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize state")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

/// In-memory store, used by tests and by `--ephemeral` runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, DateTime<Utc>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TimestampStore for MemoryStore {
    fn get(&self, key: &str) -> Option<DateTime<Utc>> {
        self.entries.get(key).copied()
    }

    fn set(&mut self, key: &str, value: DateTime<Utc>) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_memory_store_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("lastMessageUpdate"), None);
    }

    #[test]
    fn test_memory_store_set_then_get() {
        let mut store = MemoryStore::new();
        store.set("lastAlertDate", ts(1_000_000)).unwrap();
        assert_eq!(store.get("lastAlertDate"), Some(ts(1_000_000)));
    }

    #[test]
    fn test_memory_store_set_overwrites() {
        let mut store = MemoryStore::new();
        store.set("k", ts(1)).unwrap();
        store.set("k", ts(2)).unwrap();
        assert_eq!(store.get("k"), Some(ts(2)));
    }

    #[test]
    fn test_file_store_starts_empty_when_file_missing() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path().join("state.json"));
        assert_eq!(store.get("lastMessageUpdate"), None);
    }

    #[test]
    fn test_file_store_roundtrip_across_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");

        let mut store = FileStore::open(&path);
        store.set("lastMessageUpdate", ts(1_700_000_000)).unwrap();
        store.set("lastAlertDate", ts(1_700_000_123)).unwrap();
        drop(store);

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("lastMessageUpdate"), Some(ts(1_700_000_000)));
        assert_eq!(reopened.get("lastAlertDate"), Some(ts(1_700_000_123)));
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("state.json");

        let mut store = FileStore::open(&path);
        store.set("k", ts(42)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_file_store_ignores_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        std::fs::write(&path, "this is not json {").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get("lastMessageUpdate"), None);
    }

    #[test]
    fn test_file_store_recovers_after_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        std::fs::write(&path, "garbage").unwrap();

        let mut store = FileStore::open(&path);
        store.set("k", ts(7)).unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("k"), Some(ts(7)));
    }
}
