//! Best reaction time persistence.
//!
//! The record lives in a small JSON file (`{"bestTime": 250}`). A missing or
//! unreadable file means "no record yet"; reads never fail.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::{LauncherError, Result};

#[derive(Debug, Serialize, Deserialize)]
struct HighScoreRecord {
    #[serde(rename = "bestTime")]
    best_time: u64,
}

/// File-backed store for the best reaction time in milliseconds.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current record, or `None` when absent or corrupt.
    pub fn load(&self) -> Option<u64> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No high score at {}: {}", self.path.display(), e);
                return None;
            }
        };
        match serde_json::from_str::<HighScoreRecord>(&content) {
            Ok(record) => Some(record.best_time),
            Err(e) => {
                warn!("Ignoring unreadable high score file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Replace the whole file with `best_time`.
    ///
    /// Writes to a sibling temp file and renames it over the target, so a
    /// reader sees either the old record or the new one.
    pub fn save(&self, best_time: u64) -> Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let json = serde_json::to_string(&HighScoreRecord { best_time })?;
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path)
            .map_err(|e| LauncherError::Storage(format!("{}: {}", self.path.display(), e.error)))?;

        debug!("Saved high score {}ms to {}", best_time, self.path.display());
        Ok(())
    }

    /// Persist `reaction_ms` if it beats the current record.
    ///
    /// Returns whether it was a new record. A failed write still counts as a
    /// record for this session; the failure is only logged.
    pub fn record_if_better(&self, reaction_ms: u64) -> bool {
        if !is_new_record(reaction_ms, self.load()) {
            return false;
        }
        if let Err(e) = self.save(reaction_ms) {
            warn!("Failed to save high score: {}", e);
        }
        true
    }

    /// Delete the record. Missing file is not an error.
    pub fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// `reaction_ms` replaces `current` only when strictly faster.
pub fn is_new_record(reaction_ms: u64, current: Option<u64>) -> bool {
    current.is_none_or(|best| reaction_ms < best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> HighScoreStore {
        HighScoreStore::new(dir.path().join("highscore.json"))
    }

    #[test]
    fn test_missing_file_is_no_record() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load(), None);
    }

    #[test]
    fn test_corrupt_file_is_no_record() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.load(), None);

        fs::write(store.path(), r#"{"bestTime": "fast"}"#).unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        for t in [0, 1, 187, 250, u64::MAX] {
            store.save(t).unwrap();
            assert_eq!(store.load(), Some(t));
        }
    }

    #[test]
    fn test_file_format() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(321).unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, r#"{"bestTime":321}"#);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = HighScoreStore::new(dir.path().join("nested").join("deeper").join("hs.json"));
        store.save(42).unwrap();
        assert_eq!(store.load(), Some(42));
    }

    #[test]
    fn test_first_reaction_sets_record() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.record_if_better(250));
        assert_eq!(store.load(), Some(250));
    }

    #[test]
    fn test_slower_reaction_keeps_record() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(300).unwrap();
        assert!(!store.record_if_better(400));
        assert_eq!(store.load(), Some(300));
    }

    #[test]
    fn test_equal_reaction_is_not_a_record() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(300).unwrap();
        assert!(!store.record_if_better(300));
    }

    #[test]
    fn test_record_is_monotonic() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let mut last = u64::MAX;
        for r in [500, 420, 610, 300, 300, 299, 800] {
            store.record_if_better(r);
            let best = store.load().unwrap();
            assert!(best <= last);
            last = best;
        }
        assert_eq!(last, 299);
    }

    #[test]
    fn test_reset() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.reset().unwrap();
        store.save(10).unwrap();
        store.reset().unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_is_new_record() {
        assert!(is_new_record(250, None));
        assert!(is_new_record(299, Some(300)));
        assert!(!is_new_record(300, Some(300)));
        assert!(!is_new_record(400, Some(300)));
    }
}
