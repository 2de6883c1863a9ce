//! Exchange controller - core business logic

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use lumen_domain::{ExchangeRequest, OAuthClientConfig, PersistedState, Result};
use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, error, warn};

use crate::location::{callback_base, Location};
use crate::ports::{ConfigGateway, Notice, Notifier};
use crate::store::ConfigStore;

/// Per-integration exchange bookkeeping for the current process session.
#[derive(Default)]
struct IntegrationSession {
    /// An exchange call is currently in flight for this integration.
    in_flight: bool,
    /// Codes an exchange was started for this session, successful or not.
    /// Guarantees at-most-once delivery per code even when the exchange
    /// fails and `last_code` therefore stays unchanged.
    attempted: HashSet<String>,
}

/// Reacts to navigation events and performs the code-for-token exchange.
///
/// Per integration the controller moves Idle -> CodeObserved (observed
/// base matches the integration's callback and carries a fresh `code`
/// parameter) -> Exchanging (single in-flight call) -> Idle. The
/// idempotency guard is a value comparison against the persisted
/// `last_code` plus a per-session attempted set - never a one-shot flag -
/// so re-evaluating the same location any number of times is safe.
pub struct ExchangeController {
    store: Arc<ConfigStore>,
    gateway: Arc<dyn ConfigGateway>,
    notifier: Arc<dyn Notifier>,
    sessions: Mutex<HashMap<String, IntegrationSession>>,
}

impl ExchangeController {
    /// Create a controller over the given store and backend gateway.
    pub fn new(
        store: Arc<ConfigStore>,
        gateway: Arc<dyn ConfigGateway>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self { store, gateway, notifier, sessions: Mutex::new(HashMap::new()) }
    }

    /// Consume navigation events until the observer side is dropped.
    ///
    /// Evaluates the current location immediately (the mount-time case)
    /// and then once per subsequent navigation.
    pub async fn run(self: Arc<Self>, mut locations: watch::Receiver<Option<Location>>) {
        loop {
            let current = locations.borrow_and_update().clone();
            if let Some(location) = current {
                if let Err(err) = self.evaluate(&location).await {
                    error!(error = %err, "exchange evaluation failed");
                }
            }
            if locations.changed().await.is_err() {
                debug!("location observer dropped, stopping exchange controller");
                break;
            }
        }
    }

    /// Evaluate one observed location against every registered callback.
    ///
    /// Safe to call any number of times for the same location; the
    /// exchange fires at most once per distinct code value.
    ///
    /// # Errors
    /// Returns an error only when persisting the successful exchange
    /// result fails; matching and gateway failures are not errors.
    pub async fn evaluate(&self, location: &Location) -> Result<()> {
        let state = self.store.get();

        let Some((integration, config)) = Self::match_integration(&state, location) else {
            return Ok(());
        };

        let Some(code) = location.param("code") else {
            return Ok(());
        };
        if code.is_empty() {
            return Ok(());
        }

        if code == config.last_code {
            // Already exchanged; a repeated render of the same redirect.
            return Ok(());
        }

        {
            let mut sessions = self.sessions.lock();
            let session = sessions.entry(integration.clone()).or_default();
            if session.in_flight {
                // An exchange for this integration is running; a fresh code
                // will be picked up on a later navigation.
                return Ok(());
            }
            if !session.attempted.insert(code.to_string()) {
                // Already attempted this session (and evidently failed, or
                // last_code would match). Re-authorizing at the provider
                // mints a new code, which unblocks naturally.
                return Ok(());
            }
            session.in_flight = true;
        }

        debug!(integration = %integration, "authorization code observed, exchanging");

        let request = ExchangeRequest {
            code: code.to_string(),
            app_name: integration.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.callback_url.clone(),
            get_token_url: config.get_token_url.clone(),
        };

        let succeeded = self.gateway.exchange_authorization_code(&request).await;

        if let Some(session) = self.sessions.lock().get_mut(&integration) {
            session.in_flight = false;
        }

        if succeeded {
            self.store.update(|state| {
                if let Some(config) = state.integrations.get_mut(&integration) {
                    config.last_code = code.to_string();
                }
            })?;
            self.notifier.notify(Notice::success("Successfully exchanged code for tokens"));
        } else {
            warn!(integration = %integration, "code exchange rejected by backend");
            self.notifier.notify(Notice::error("Failed to exchange code for tokens"));
        }

        Ok(())
    }

    /// First integration whose stripped callback equals the observed base.
    ///
    /// Iteration order over the integration map is deterministic, so the
    /// degenerate duplicate-callback case (rejected at save time) resolves
    /// to a stable first-match winner here.
    fn match_integration(
        state: &PersistedState,
        location: &Location,
    ) -> Option<(String, OAuthClientConfig)> {
        state
            .integrations
            .iter()
            .find(|(_, config)| {
                callback_base(&config.callback_url).as_deref() == Some(location.base.as_str())
            })
            .map(|(name, config)| (name.clone(), config.clone()))
    }
}
