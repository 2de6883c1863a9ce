//! Application context - dependency injection container

use std::sync::Arc;

use lumen_core::{
    ConfigGateway, ConfigStore, ExchangeController, LocationObserver, Notifier, SettingsService,
};
use lumen_domain::{AppConfig, Result};
use lumen_infra::{HttpConfigGateway, JsonStateRepository, TracingNotifier};
use tokio::task::JoinHandle;

/// Wired-up application core.
///
/// Owns the configuration store, the location observer, the settings
/// service, and the exchange controller, all sharing one gateway and
/// notifier. The embedding surface keeps one of these alive for the whole
/// session and feeds it navigation events.
pub struct AppContext {
    /// Runtime configuration the context was built from.
    pub config: AppConfig,
    /// The persisted configuration store.
    pub store: Arc<ConfigStore>,
    /// Source of navigation events.
    pub observer: LocationObserver,
    /// Edit-boundary operations.
    pub settings: SettingsService,
    controller: Arc<ExchangeController>,
}

impl AppContext {
    /// Build the full dependency graph from configuration.
    ///
    /// Hydrates the store from the configured state directory and connects
    /// the gateway to the configured backend.
    ///
    /// # Errors
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn initialize(config: AppConfig) -> Result<Self> {
        let repository = Arc::new(JsonStateRepository::new(config.storage.state_dir.clone()));
        let store = Arc::new(ConfigStore::hydrate(repository));

        let gateway: Arc<dyn ConfigGateway> = Arc::new(HttpConfigGateway::new(&config.backend)?);
        let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);

        let settings = SettingsService::new(
            Arc::clone(&store),
            Arc::clone(&gateway),
            Arc::clone(&notifier),
        );
        let controller =
            Arc::new(ExchangeController::new(Arc::clone(&store), gateway, notifier));

        Ok(Self { config, store, observer: LocationObserver::new(), settings, controller })
    }

    /// Start the exchange controller's subscription to navigation events.
    ///
    /// The controller subscribes exactly once and evaluates per event; the
    /// task ends when this context (and with it the observer) is dropped.
    pub fn spawn_exchange_loop(&self) -> JoinHandle<()> {
        tokio::spawn(Arc::clone(&self.controller).run(self.observer.subscribe()))
    }

    /// Record a navigation of the embedding surface.
    ///
    /// # Errors
    /// Returns an error when `url` is not an absolute URL.
    pub fn handle_navigation(&self, url: &str) -> Result<()> {
        self.observer.navigate(url)
    }
}
