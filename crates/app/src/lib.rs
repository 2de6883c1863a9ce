//! # Lumen App
//!
//! Application layer - wiring and the command surface.
//!
//! This crate contains:
//! - The application context (dependency injection)
//! - Command functions (UI layer -> core bridge)
//! - The development harness entry point
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Provides the commands the (out-of-scope) UI layer invokes

pub mod commands;
pub mod context;

// Re-export for convenience
pub use context::AppContext;
