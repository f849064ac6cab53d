//! Snapshot persistence for the day log.
//!
//! The log is stored as one JSON array of entries, loaded wholesale at
//! startup and rewritten wholesale after every mutation. That keeps the
//! engine's ordered-sequence invariant trivially intact on disk and
//! matches the engine's `to_json`/`from_json` contract exactly.
//!
//! Saves go through a temporary file in the same directory followed by a
//! rename, under an advisory lock on a sibling `.lock` file, so two
//! `daylog` processes cannot interleave a save.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

use daylog_core::ActivityLog;

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed.
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file held something other than a log snapshot.
    #[error("invalid snapshot at {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A snapshot file holding one serialized [`ActivityLog`].
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Points the store at a snapshot path. Nothing is touched on disk
    /// until [`SnapshotStore::load`] or [`SnapshotStore::save`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where the snapshot lives.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the snapshot; a missing file is the empty log.
    pub fn load(&self) -> Result<ActivityLog, StoreError> {
        let blob = match fs::read_to_string(&self.path) {
            Ok(blob) => blob,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no snapshot yet, starting empty");
                return Ok(ActivityLog::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let log = ActivityLog::from_json(&blob).map_err(|source| StoreError::Decode {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(entries = log.len(), "snapshot loaded");
        Ok(log)
    }

    /// Replaces the snapshot with the given log.
    ///
    /// Creates the parent directory if needed and swaps the file in
    /// atomically via a temporary sibling.
    pub fn save(&self, log: &ActivityLog) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let _lock = self.acquire_lock()?;

        let blob = log.to_json().map_err(|source| StoreError::Decode {
            path: self.path.clone(),
            source,
        })?;

        let tmp_path = self.path.with_extension("json.tmp");
        let mut tmp = File::create(&tmp_path).map_err(io_err)?;
        tmp.write_all(blob.as_bytes()).map_err(io_err)?;
        tmp.sync_all().map_err(io_err)?;
        drop(tmp);
        fs::rename(&tmp_path, &self.path).map_err(io_err)?;

        tracing::debug!(entries = log.len(), path = %self.path.display(), "snapshot saved");
        Ok(())
    }

    /// Takes the advisory lock on the sibling `.lock` file. The lock is
    /// released when the returned handle drops.
    fn acquire_lock(&self) -> Result<File, StoreError> {
        let lock_path = self.path.with_extension("lock");
        let lock = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|source| StoreError::Io {
                path: lock_path.clone(),
                source,
            })?;
        lock.lock_exclusive().map_err(|source| StoreError::Io {
            path: lock_path,
            source,
        })?;
        Ok(lock)
    }
}
