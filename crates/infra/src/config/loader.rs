//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `LUMEN_BACKEND_URL`: Base URL of the device backend
//! - `LUMEN_BACKEND_TIMEOUT`: Request timeout in seconds (optional)
//! - `LUMEN_STATE_DIR`: Directory the persisted state blob lives in
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./lumen.json` or `./lumen.toml` (current working directory)
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use lumen_domain::{AppConfig, BackendConfig, LumenError, Result, StorageConfig};

/// Default request timeout when `LUMEN_BACKEND_TIMEOUT` is not set.
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `LumenError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<AppConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(err) => {
            tracing::debug!(error = ?err, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `LumenError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<AppConfig> {
    let base_url = env_var("LUMEN_BACKEND_URL")?;
    let state_dir = env_var("LUMEN_STATE_DIR")?;
    let timeout_seconds = match std::env::var("LUMEN_BACKEND_TIMEOUT") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|err| LumenError::Config(format!("Invalid backend timeout: {err}")))?,
        Err(_) => DEFAULT_TIMEOUT_SECONDS,
    };

    Ok(AppConfig {
        backend: BackendConfig { base_url, timeout_seconds },
        storage: StorageConfig { state_dir },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `LumenError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<AppConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(LumenError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            LumenError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|err| LumenError::Config(format!("Failed to read config file: {err}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|err| LumenError::Config(format!("Invalid TOML format: {err}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|err| LumenError::Config(format!("Invalid JSON format: {err}"))),
        _ => Err(LumenError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory and the executable's directory
/// for `config.{json,toml}` and `lumen.{json,toml}`.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("lumen.json"),
            cwd.join("lumen.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("lumen.json"),
                exe_dir.join("lumen.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| LumenError::Config(format!("Missing required environment variable: {key}")))
}
