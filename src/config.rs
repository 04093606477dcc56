//! Runtime configuration: where statistics live and where word lists come from

use crate::session::FileStatsStore;
use crate::wordlists::{DirectorySource, EmbeddedSource, WordSource};
use directories::ProjectDirs;
use std::path::PathBuf;

const STATS_FILE_NAME: &str = "stats.json";

/// Default stats file under the platform data directory, or `./stats.json`
#[must_use]
pub fn default_stats_path() -> PathBuf {
    ProjectDirs::from("", "", "wordle_game").map_or_else(
        || PathBuf::from(STATS_FILE_NAME),
        |dirs| dirs.data_local_dir().join(STATS_FILE_NAME),
    )
}

/// Resolved storage settings
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Explicit stats file; `None` uses [`default_stats_path`]
    pub stats_file: Option<PathBuf>,
    /// Directory of `<language>.txt` lists; `None` uses the embedded lists
    pub words_dir: Option<PathBuf>,
}

impl Settings {
    #[must_use]
    pub fn stats_path(&self) -> PathBuf {
        self.stats_file.clone().unwrap_or_else(default_stats_path)
    }

    #[must_use]
    pub fn stats_store(&self) -> FileStatsStore {
        FileStatsStore::with_path(self.stats_path())
    }

    #[must_use]
    pub fn word_source(&self) -> Box<dyn WordSource> {
        match &self.words_dir {
            Some(dir) => Box::new(DirectorySource::new(dir)),
            None => Box::new(EmbeddedSource),
        }
    }
}
