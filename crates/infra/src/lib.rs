//! # Lumen Infra
//!
//! Infrastructure adapters behind the core's port traits.
//!
//! This crate contains:
//! - JSON file persistence for the configuration store
//! - The reqwest-based device backend gateway
//! - The tracing-backed notifier
//! - The application configuration loader

pub mod config;
pub mod gateway;
pub mod notify;
pub mod storage;

// Re-export commonly used items
pub use gateway::HttpConfigGateway;
pub use notify::TracingNotifier;
pub use storage::JsonStateRepository;
