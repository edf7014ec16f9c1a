//! JSON file backed [`StateStore`].

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::StateStore;
use super::errors::StateError;

/// On-disk shape of `~/.mkcache/state.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_makecache: Option<DateTime<Utc>>,
}

/// Stores [`SchedulerState`] in a single JSON file, written atomically.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the state file. A missing file is an empty state.
    pub fn load(&self) -> Result<SchedulerState, StateError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SchedulerState::default());
            }
            Err(e) => {
                return Err(StateError::ReadFailed {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        serde_json::from_str(&content).map_err(|e| StateError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn save(&self, state: &SchedulerState) -> Result<(), StateError> {
        let write_failed = |source: std::io::Error| StateError::WriteFailed {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_failed)?;
        }

        let content = serde_json::to_string_pretty(state).map_err(|e| {
            write_failed(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        let temp_file = self.path.with_extension("json.tmp");
        if let Err(e) = fs::write(&temp_file, &content) {
            cleanup_temp_file(&temp_file, &e);
            return Err(write_failed(e));
        }
        if let Err(e) = fs::rename(&temp_file, &self.path) {
            cleanup_temp_file(&temp_file, &e);
            return Err(write_failed(e));
        }
        Ok(())
    }
}

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file) {
        warn!(
            event = "core.state.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err,
        );
    }
}

impl StateStore for FileStateStore {
    fn last_makecache(&self) -> Result<Option<DateTime<Utc>>, StateError> {
        Ok(self.load()?.last_makecache)
    }

    fn record_makecache(&mut self, at: DateTime<Utc>) -> Result<(), StateError> {
        let mut state = self.load()?;
        state.last_makecache = Some(at);
        self.save(&state)?;
        debug!(
            event = "core.state.makecache_recorded",
            path = %self.path.display(),
            at = %at
        );
        Ok(())
    }
}
