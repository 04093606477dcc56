//! Persistence boundary for statistics
//!
//! The store only moves raw text; parsing and serialization live in
//! [`load_statistics`] and [`save_statistics`].

use super::Statistics;
use crate::error::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

pub trait StatsStore {
    /// Raw stored text, `None` when nothing has been stored yet
    ///
    /// # Errors
    /// Returns an I/O error if the store exists but can't be read.
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the stored text
    ///
    /// # Errors
    /// Returns an I/O error if the text can't be written.
    fn write(&self, raw: &str) -> io::Result<()>;
}

/// Read and parse statistics, defaulting to zeros when nothing is stored
///
/// # Errors
/// Returns `CorruptStats` if stored text doesn't parse, or `Io` if it can't be read.
pub fn load_statistics(store: &dyn StatsStore) -> Result<Statistics> {
    match store.read()? {
        Some(raw) => {
            let mut stats: Statistics = serde_json::from_str(&raw)?;
            stats.refresh_average();
            Ok(stats)
        }
        None => Ok(Statistics::default()),
    }
}

/// Serialize and write statistics as pretty JSON
///
/// # Errors
/// Returns `Io` if the store rejects the write.
pub fn save_statistics(store: &dyn StatsStore, stats: &Statistics) -> Result<()> {
    let raw = serde_json::to_string_pretty(stats)?;
    store.write(&raw)?;
    Ok(())
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct FileStatsStore {
    path: PathBuf,
}

impl FileStatsStore {
    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStore for FileStatsStore {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, raw: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, raw)
    }
}

/// In-memory store; clones share the same contents
#[derive(Debug, Clone, Default)]
pub struct MemoryStatsStore {
    contents: Arc<Mutex<Option<String>>>,
    fail_writes: bool,
}

impl MemoryStatsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with raw text
    #[must_use]
    pub fn with_contents(raw: &str) -> Self {
        Self {
            contents: Arc::new(Mutex::new(Some(raw.to_string()))),
            fail_writes: false,
        }
    }

    /// A store whose writes always fail
    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Current raw contents
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl StatsStore for MemoryStatsStore {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.contents())
    }

    fn write(&self, raw: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store is read-only",
            ));
        }
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use tempfile::tempdir;

    #[test]
    fn load_defaults_when_missing() {
        let dir = tempdir().unwrap();
        let store = FileStatsStore::with_path(dir.path().join("stats.json"));
        assert_eq!(load_statistics(&store).unwrap(), Statistics::default());
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempdir().unwrap();
        let store = FileStatsStore::with_path(dir.path().join("nested").join("stats.json"));

        let mut stats = Statistics::default();
        stats.record(true, 2, 500);
        save_statistics(&store, &stats).unwrap();

        assert!(store.path().exists());
        assert_eq!(load_statistics(&store).unwrap(), stats);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stats.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_statistics(&FileStatsStore::with_path(&path)).unwrap_err();
        assert!(matches!(err, GameError::CorruptStats(_)));
    }

    #[test]
    fn six_field_record_loads_with_derived_average() {
        let store = MemoryStatsStore::with_contents(
            r#"{"totalGames":2,"totalWins":2,"totalScore":900,"totalAttempts":7,"currentStreak":2,"bestStreak":2}"#,
        );
        let stats = load_statistics(&store).unwrap();
        assert_eq!(stats.total_games, 2);
        assert!((stats.average_attempts - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn memory_store_failing_writes() {
        let store = MemoryStatsStore::new().failing_writes();
        let err = save_statistics(&store, &Statistics::default()).unwrap_err();
        assert!(matches!(err, GameError::Io(_)));
        assert!(store.contents().is_none());
    }

    #[test]
    fn memory_store_clones_share_contents() {
        let store = MemoryStatsStore::new();
        let handle = store.clone();
        save_statistics(&store, &Statistics::default()).unwrap();
        assert!(handle.contents().unwrap().contains("totalGames"));
    }
}
