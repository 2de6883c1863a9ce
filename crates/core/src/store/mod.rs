//! Persisted configuration store
//!
//! The single owned state aggregate every other component reads and
//! writes. There are no ambient globals; consumers receive an
//! `Arc<ConfigStore>` explicitly.

use std::sync::Arc;

use lumen_domain::constants::SCHEMA_VERSION;
use lumen_domain::{PersistedState, Result, StateEnvelope};
use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::ports::StateRepository;

/// Owned, persisted application state with change subscriptions.
///
/// Every committed update is written through to the [`StateRepository`]
/// before observers see it; with the single event loop the surrounding
/// application runs on, updates are atomic from an observer's point of
/// view (no partial-write visibility).
pub struct ConfigStore {
    repository: Arc<dyn StateRepository>,
    state: RwLock<PersistedState>,
    tx: watch::Sender<PersistedState>,
}

impl ConfigStore {
    /// Build a store hydrated from durable storage.
    ///
    /// Resets to defaults when no blob exists, when the blob cannot be
    /// read, or when its schema version differs from the current one.
    /// There is deliberately no migration path; a mismatched version is
    /// treated like a fresh installation.
    pub fn hydrate(repository: Arc<dyn StateRepository>) -> Self {
        let state = match repository.load() {
            Ok(Some(envelope)) if envelope.version == SCHEMA_VERSION => {
                debug!("state hydrated from durable storage");
                envelope.state
            }
            Ok(Some(envelope)) => {
                warn!(
                    found = envelope.version,
                    expected = SCHEMA_VERSION,
                    "persisted state version mismatch, resetting to defaults"
                );
                PersistedState::default()
            }
            Ok(None) => {
                debug!("no persisted state found, starting with defaults");
                PersistedState::default()
            }
            Err(err) => {
                warn!(error = %err, "persisted state unreadable, resetting to defaults");
                PersistedState::default()
            }
        };

        let (tx, _rx) = watch::channel(state.clone());
        Self { repository, state: RwLock::new(state), tx }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn get(&self) -> PersistedState {
        self.state.read().clone()
    }

    /// Mutate the state and persist the result.
    ///
    /// The mutation is applied to a copy first and only committed (and
    /// broadcast to subscribers) once the write to durable storage has
    /// succeeded, so a storage failure leaves the in-memory state exactly
    /// as it was.
    ///
    /// # Errors
    /// Returns the repository error when persisting fails; the mutation is
    /// discarded in that case.
    pub fn update<F>(&self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut PersistedState),
    {
        let mut guard = self.state.write();
        let mut next = guard.clone();
        mutate(&mut next);

        if next == *guard {
            return Ok(());
        }

        self.repository.save(&StateEnvelope::current(next.clone()))?;
        *guard = next.clone();
        drop(guard);

        self.tx.send_replace(next);
        Ok(())
    }

    /// Subscribe to committed state changes.
    ///
    /// The receiver starts out seeing the current state and is notified on
    /// every committed [`update`](Self::update).
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PersistedState> {
        self.tx.subscribe()
    }
}
