//! Application configuration structures
//!
//! Runtime configuration of the console process itself (where the device
//! backend lives, where state is stored). Loaded by the infra config
//! loader from environment variables or a config file.

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Device backend connection settings.
    pub backend: BackendConfig,
    /// Durable storage settings.
    pub storage: StorageConfig,
}

/// Connection settings for the device backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the device backend (e.g. `http://display.local:8080`).
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Durable storage settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory the persisted state blob is written to.
    pub state_dir: String,
}

fn default_timeout_seconds() -> u64 {
    30
}
