//! Shared helpers for application-level integration tests.
#![allow(dead_code)]

use std::time::Duration;

use lumen_app::AppContext;
use lumen_domain::{AppConfig, BackendConfig, OAuthClientConfig, StorageConfig};
use tempfile::TempDir;
use wiremock::MockServer;

/// Callback URL used by the configured test integration.
pub const CALLBACK_URL: &str = "https://app.example/cb";

/// Fully wired application context talking to a mock backend and a
/// temporary state directory.
pub struct TestHarness {
    pub server: MockServer,
    pub state_dir: TempDir,
    pub context: AppContext,
}

impl TestHarness {
    /// Start a mock backend and wire a fresh context against it.
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let state_dir = TempDir::new().unwrap();
        let context = context_for(&server, &state_dir);
        Self { server, state_dir, context }
    }

    /// Re-create the context from the same durable storage, simulating a
    /// page reload / fresh process session.
    pub fn reload(&mut self) {
        self.context = context_for(&self.server, &self.state_dir);
    }

    /// Register complete music-integration credentials with the callback
    /// URL the tests navigate to.
    pub fn configure_music_integration(&self) {
        self.context
            .settings
            .save_oauth_client(
                "spotify",
                OAuthClientConfig {
                    client_id: "client".to_string(),
                    client_secret: "secret".to_string(),
                    authorize_url: "https://provider.example/authorize".to_string(),
                    callback_url: CALLBACK_URL.to_string(),
                    get_token_url: "https://backend.example/token".to_string(),
                    last_code: String::new(),
                },
            )
            .unwrap();
    }

    /// Number of requests the mock backend has received on `path`.
    pub async fn requests_to(&self, path: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .filter(|request| request.url.path() == path)
            .count()
    }

    /// Poll until `condition` holds or a generous timeout elapses.
    pub async fn wait_until(&self, mut condition: impl FnMut(&AppContext) -> bool) {
        for _ in 0..200 {
            if condition(&self.context) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("condition not met within timeout");
    }

    /// Poll until the mock backend has seen `count` requests on `path`.
    pub async fn wait_for_requests(&self, path: &str, count: usize) {
        for _ in 0..200 {
            if self.requests_to(path).await >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("backend did not receive {count} requests to {path} within timeout");
    }
}

fn context_for(server: &MockServer, state_dir: &TempDir) -> AppContext {
    let config = AppConfig {
        backend: BackendConfig { base_url: server.uri(), timeout_seconds: 5 },
        storage: StorageConfig { state_dir: state_dir.path().display().to_string() },
    };
    AppContext::initialize(config).unwrap()
}

/// Give in-flight background work a moment to settle before asserting
/// that nothing happened.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(100)).await;
}
