//! Tracing-backed notifier
//!
//! The headless stand-in for the toast surface of the original console:
//! notices land in the structured log, where the embedding UI (or a human
//! tailing the harness) picks them up.

use lumen_core::{Notice, NoticeLevel, Notifier};
use tracing::{error, info};

/// [`Notifier`] implementation that logs notices.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => info!(outcome = "info", "{}", notice.message),
            NoticeLevel::Success => info!(outcome = "success", "{}", notice.message),
            NoticeLevel::Error => error!(outcome = "failure", "{}", notice.message),
        }
    }
}
