//! JSON file persistence for the configuration store
//!
//! The whole persisted state travels as one versioned JSON envelope under
//! a fixed file name, mirroring the single-key blob the original console
//! kept in browser storage.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lumen_core::StateRepository;
use lumen_domain::constants::STATE_FILE_NAME;
use lumen_domain::{LumenError, Result, StateEnvelope};
use tracing::debug;

/// File-backed [`StateRepository`] writing one JSON envelope.
pub struct JsonStateRepository {
    path: PathBuf,
}

impl JsonStateRepository {
    /// Repository storing its blob inside `state_dir`.
    #[must_use]
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self { path: state_dir.into().join(STATE_FILE_NAME) }
    }

    /// Path of the blob file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateRepository for JsonStateRepository {
    fn load(&self) -> Result<Option<StateEnvelope>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(LumenError::Storage(format!(
                    "failed to read {}: {err}",
                    self.path.display()
                )))
            }
        };

        let envelope = serde_json::from_str(&contents).map_err(|err| {
            LumenError::Storage(format!("invalid state blob {}: {err}", self.path.display()))
        })?;
        Ok(Some(envelope))
    }

    fn save(&self, envelope: &StateEnvelope) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                LumenError::Storage(format!("failed to create {}: {err}", parent.display()))
            })?;
        }

        let json = serde_json::to_string_pretty(envelope)
            .map_err(|err| LumenError::Storage(format!("failed to serialize state: {err}")))?;

        // Write-then-rename so a crash mid-write never leaves a torn blob.
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, json).map_err(|err| {
            LumenError::Storage(format!("failed to write {}: {err}", staging.display()))
        })?;
        fs::rename(&staging, &self.path).map_err(|err| {
            LumenError::Storage(format!("failed to commit {}: {err}", self.path.display()))
        })?;

        debug!(path = %self.path.display(), "state blob written");
        Ok(())
    }
}
