//! HTTP client for the device backend
//!
//! Wraps the three submit operations of the [`ConfigGateway`] port.
//! The backend signals success strictly with HTTP 200; any other status
//! and any transport failure fold into `false` at this boundary, with the
//! detail going to the log rather than across the port.

use std::time::Duration;

use async_trait::async_trait;
use lumen_core::ConfigGateway;
use lumen_domain::{
    BackendConfig, BrokerageCredentials, DisplayConfig, ExchangeRequest, LumenError, Result,
};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};

/// Path of the display configuration endpoint.
const DASHBOARD_CONFIG_PATH: &str = "/dashboard/config";

/// Path of the code-for-token exchange endpoint.
const OAUTH_CODE_PATH: &str = "/oauth2/code";

/// reqwest-based implementation of the [`ConfigGateway`] port.
pub struct HttpConfigGateway {
    client: Client,
    base_url: String,
}

impl HttpConfigGateway {
    /// Build a gateway against the configured backend.
    ///
    /// # Errors
    /// Returns `LumenError::Config` if the HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|err| LumenError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self { client, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    async fn post_json<T: Serialize + Sync + ?Sized>(&self, path: &str, body: &T) -> bool {
        let url = format!("{}{}", self.base_url, path);
        match self.client.post(&url).json(body).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                debug!(url = %url, "backend accepted request");
                true
            }
            Ok(response) => {
                warn!(url = %url, status = %response.status(), "backend rejected request");
                false
            }
            Err(err) => {
                warn!(url = %url, error = %err, "backend request failed");
                false
            }
        }
    }
}

#[async_trait]
impl ConfigGateway for HttpConfigGateway {
    async fn submit_display_config(&self, config: &DisplayConfig) -> bool {
        self.post_json(DASHBOARD_CONFIG_PATH, config).await
    }

    async fn submit_integration_credentials(
        &self,
        integration: &str,
        credentials: &BrokerageCredentials,
    ) -> bool {
        let path = format!("/{integration}/credentials");
        self.post_json(&path, credentials).await
    }

    async fn exchange_authorization_code(&self, request: &ExchangeRequest) -> bool {
        self.post_json(OAUTH_CODE_PATH, request).await
    }
}
