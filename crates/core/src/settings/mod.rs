//! Settings service
//!
//! The edit-boundary operations the surrounding UI layer invokes.

mod service;

pub use service::SettingsService;
