//! Port interfaces between core logic and infrastructure
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lumen_domain::{
    BrokerageCredentials, DisplayConfig, ExchangeRequest, Result, StateEnvelope,
};

/// Trait for persisting the state envelope to durable storage.
pub trait StateRepository: Send + Sync {
    /// Load the previously persisted envelope, or `None` on first run.
    ///
    /// # Errors
    /// Returns an error if storage exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<StateEnvelope>>;

    /// Write the full envelope, replacing any previous blob.
    ///
    /// # Errors
    /// Returns an error if the blob cannot be written.
    fn save(&self, envelope: &StateEnvelope) -> Result<()>;
}

/// Trait for the device backend the console pushes configuration to.
///
/// Every operation folds transport failures and non-success responses into
/// a plain `false`; the core never distinguishes them and never retries.
#[async_trait]
pub trait ConfigGateway: Send + Sync {
    /// Push the display configuration to the device backend.
    async fn submit_display_config(&self, config: &DisplayConfig) -> bool;

    /// Push login credentials for a per-integration credential endpoint.
    async fn submit_integration_credentials(
        &self,
        integration: &str,
        credentials: &BrokerageCredentials,
    ) -> bool;

    /// Hand an authorization code to the backend for the server-side
    /// code-for-token exchange.
    async fn exchange_authorization_code(&self, request: &ExchangeRequest) -> bool;
}

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A user-facing notification (the toast of the original console).
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notice {
    /// Informational notice.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into(), at: Utc::now() }
    }

    /// Success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into(), at: Utc::now() }
    }

    /// Failure notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into(), at: Utc::now() }
    }
}

/// Trait for surfacing notices to the user.
pub trait Notifier: Send + Sync {
    /// Surface a notice. Implementations must not block.
    fn notify(&self, notice: Notice);
}
