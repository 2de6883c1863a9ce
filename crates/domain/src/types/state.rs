//! Persisted application state
//!
//! Everything the console remembers across reloads lives in one
//! [`PersistedState`] aggregate, written as a single versioned JSON
//! envelope under a fixed storage name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{MUSIC_INTEGRATION, SCHEMA_VERSION};
use crate::types::display::DisplayConfig;
use crate::types::oauth::{BrokerageCredentials, OAuthClientConfig};

/// Aggregate of all persisted configuration.
///
/// Integrations are keyed by name in an ordered map so callback matching
/// iterates deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    /// One OAuth client registration per integration.
    pub integrations: BTreeMap<String, OAuthClientConfig>,
    /// Display and widget preferences.
    pub display: DisplayConfig,
    /// Brokerage login credentials.
    pub brokerage: BrokerageCredentials,
}

impl Default for PersistedState {
    fn default() -> Self {
        let mut integrations = BTreeMap::new();
        integrations.insert(MUSIC_INTEGRATION.to_string(), OAuthClientConfig::default());
        Self {
            integrations,
            display: DisplayConfig::default(),
            brokerage: BrokerageCredentials::default(),
        }
    }
}

impl PersistedState {
    /// Find another integration already claiming `callback_url`.
    ///
    /// Two integrations sharing a callback would make redirect matching
    /// ambiguous, so saves are rejected when this returns a name. Empty
    /// callbacks never conflict.
    #[must_use]
    pub fn callback_conflict(&self, integration: &str, callback_url: &str) -> Option<&str> {
        if callback_url.is_empty() {
            return None;
        }
        self.integrations
            .iter()
            .find(|(name, config)| {
                name.as_str() != integration && config.callback_url == callback_url
            })
            .map(|(name, _)| name.as_str())
    }
}

/// Versioned wrapper around [`PersistedState`] as written to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateEnvelope {
    /// Schema version of `state`.
    pub version: u32,
    /// The persisted aggregate itself.
    pub state: PersistedState,
}

impl StateEnvelope {
    /// Wrap a state snapshot with the current schema version.
    #[must_use]
    pub fn current(state: PersistedState) -> Self {
        Self { version: SCHEMA_VERSION, state }
    }
}
