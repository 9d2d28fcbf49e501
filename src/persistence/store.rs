//! JSON file holding the latest snapshot

use super::Snapshot;
use crate::session::GameSession;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// State file used when none is given on the command line
pub const DEFAULT_STATE_FILE: &str = "par_state.json";

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved snapshot
    ///
    /// A missing file is `Ok(None)`. Content that does not parse is logged
    /// and also treated as absent.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read.
    pub fn load(&self) -> Result<Option<Snapshot>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read state file {}", self.path.display()));
            }
        };

        match serde_json::from_str(&json) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable state file");
                Ok(None)
            }
        }
    }

    /// Overwrite the state file with `snapshot`
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot).context("Failed to encode snapshot")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write state file {}", self.path.display()))?;
        debug!(path = %self.path.display(), submissions = snapshot.submissions.len(), "state saved");
        Ok(())
    }

    /// Save `session`'s progress; a session still loading writes nothing
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save_session(&self, session: &GameSession) -> Result<()> {
        match session.snapshot() {
            Some(snapshot) => self.save(&snapshot),
            None => Ok(()),
        }
    }

    /// Remove the state file; a missing file is fine
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove state file {}", self.path.display())),
        }
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(DEFAULT_STATE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::BoardSnapshot;

    fn temp_store(name: &str) -> SnapshotStore {
        let path = std::env::temp_dir().join(format!(
            "par_puzzle_{}_{name}.json",
            std::process::id()
        ));
        let store = SnapshotStore::new(path);
        store.clear().unwrap();
        store
    }

    fn sample() -> Snapshot {
        Snapshot {
            date: "2024-05-17".into(),
            submissions: vec!["KLMNO".into()],
            submission_indices: vec![vec![0, 1, 2, 3, 4]],
            board: Some(BoardSnapshot {
                letters: "KLMNOFGHIJABCDEPQRSTUVWXY".chars().collect(),
                original_index: (10..15).chain(5..10).chain(0..5).chain(15..25).collect(),
            }),
        }
    }

    #[test]
    fn missing_file_is_none() {
        let store = temp_store("missing");
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load() {
        let store = temp_store("roundtrip");
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn save_session_skips_loading() {
        let store = temp_store("loading");
        store.save_session(&GameSession::loading()).unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn garbage_is_treated_as_absent() {
        let store = temp_store("garbage");
        fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().unwrap().is_none());
        store.clear().unwrap();
    }
}
