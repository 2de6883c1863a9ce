//! Settings service - edit-boundary operations
//!
//! Field validation lives here, not in the store: the store accepts
//! whatever it is given, and this service is the boundary that clamps,
//! checks, and notifies.

use std::sync::Arc;

use lumen_domain::constants::{
    BROKERAGE_INTEGRATION, CHARACTERS_PER_SECOND_MAX, CHARACTERS_PER_SECOND_MIN,
};
use lumen_domain::{
    LumenError, OAuthClientConfig, Orientation, Region, Result, Theme, Widget,
};
use tracing::{debug, warn};

use crate::ports::{ConfigGateway, Notice, Notifier};
use crate::store::ConfigStore;

/// Edit and submit operations over the configuration store.
pub struct SettingsService {
    store: Arc<ConfigStore>,
    gateway: Arc<dyn ConfigGateway>,
    notifier: Arc<dyn Notifier>,
}

impl SettingsService {
    /// Create a settings service over the given store and gateway.
    pub fn new(
        store: Arc<ConfigStore>,
        gateway: Arc<dyn ConfigGateway>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self { store, gateway, notifier }
    }

    /// Assign a widget to a display region.
    ///
    /// # Errors
    /// Returns an error when persisting fails.
    pub fn set_widget(&self, region: Region, widget: Widget) -> Result<()> {
        self.store.update(|state| state.display.set_widget(region, widget))
    }

    /// Set the display color scheme.
    ///
    /// # Errors
    /// Returns an error when persisting fails.
    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.store.update(|state| state.display.theme = theme)
    }

    /// Set the display orientation.
    ///
    /// # Errors
    /// Returns an error when persisting fails.
    pub fn set_orientation(&self, orientation: Orientation) -> Result<()> {
        self.store.update(|state| state.display.orientation = orientation)
    }

    /// Set the accent color (`#rrggbb`).
    ///
    /// # Errors
    /// Returns an error when persisting fails.
    pub fn set_accent_color(&self, accent_color: String) -> Result<()> {
        self.store.update(|state| state.display.accent_color = accent_color)
    }

    /// Set the text-rendering speed, clamped to the accepted range.
    ///
    /// # Errors
    /// Returns an error when persisting fails.
    pub fn set_characters_per_second(&self, value: u8) -> Result<()> {
        let clamped = value.clamp(CHARACTERS_PER_SECOND_MIN, CHARACTERS_PER_SECOND_MAX);
        if clamped != value {
            debug!(requested = value, clamped, "characters per second out of range, clamping");
        }
        self.store.update(|state| state.display.characters_per_second = clamped)
    }

    /// Set the brokerage login email.
    ///
    /// # Errors
    /// Returns an error when persisting fails.
    pub fn set_brokerage_email(&self, email: String) -> Result<()> {
        self.store.update(|state| state.brokerage.email = email)
    }

    /// Set the brokerage login password.
    ///
    /// # Errors
    /// Returns an error when persisting fails.
    pub fn set_brokerage_password(&self, password: String) -> Result<()> {
        self.store.update(|state| state.brokerage.password = password)
    }

    /// Save an integration's OAuth client registration.
    ///
    /// Rejects a non-empty callback URL already claimed by another
    /// integration; two integrations sharing a callback would make
    /// redirect matching ambiguous.
    ///
    /// # Errors
    /// Returns `LumenError::InvalidInput` on a callback conflict, or a
    /// storage error when persisting fails.
    pub fn save_oauth_client(&self, integration: &str, config: OAuthClientConfig) -> Result<()> {
        let state = self.store.get();
        if let Some(holder) = state.callback_conflict(integration, &config.callback_url) {
            warn!(
                integration,
                holder,
                callback = %config.callback_url,
                "rejecting duplicate callback URL"
            );
            return Err(LumenError::InvalidInput(format!(
                "callback URL {} is already used by integration {holder}",
                config.callback_url
            )));
        }

        self.store.update(|state| {
            state.integrations.insert(integration.to_string(), config);
        })
    }

    /// Push the current display configuration to the device backend.
    ///
    /// Returns whether the backend accepted it; a notice is surfaced
    /// either way.
    pub async fn upload_display_config(&self) -> bool {
        let display = self.store.get().display;
        let accepted = self.gateway.submit_display_config(&display).await;
        if accepted {
            self.notifier.notify(Notice::success("Config uploaded successfully"));
        } else {
            self.notifier.notify(Notice::error("Failed to upload config"));
        }
        accepted
    }

    /// Submit the stored brokerage credentials to the backend.
    ///
    /// Incomplete credentials surface an informational notice and make no
    /// network call at all.
    pub async fn save_brokerage_credentials(&self) -> bool {
        let credentials = self.store.get().brokerage;
        if !credentials.is_complete() {
            self.notifier.notify(Notice::info("Please enter your brokerage credentials"));
            return false;
        }

        let accepted = self
            .gateway
            .submit_integration_credentials(BROKERAGE_INTEGRATION, &credentials)
            .await;
        if accepted {
            self.notifier.notify(Notice::success("Credentials saved successfully"));
        } else {
            self.notifier.notify(Notice::error("Failed to save credentials"));
        }
        accepted
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use lumen_domain::{
        BrokerageCredentials, DisplayConfig, ExchangeRequest, PersistedState, StateEnvelope,
    };
    use parking_lot::Mutex;

    use super::*;
    use crate::ports::{NoticeLevel, StateRepository};

    #[derive(Default)]
    struct MemoryRepository {
        envelope: Mutex<Option<StateEnvelope>>,
    }

    impl StateRepository for MemoryRepository {
        fn load(&self) -> Result<Option<StateEnvelope>> {
            Ok(self.envelope.lock().clone())
        }

        fn save(&self, envelope: &StateEnvelope) -> Result<()> {
            *self.envelope.lock() = Some(envelope.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingGateway {
        display_submits: Mutex<Vec<DisplayConfig>>,
        credential_submits: Mutex<Vec<(String, BrokerageCredentials)>>,
        reject: bool,
    }

    #[async_trait]
    impl ConfigGateway for CountingGateway {
        async fn submit_display_config(&self, config: &DisplayConfig) -> bool {
            self.display_submits.lock().push(config.clone());
            !self.reject
        }

        async fn submit_integration_credentials(
            &self,
            integration: &str,
            credentials: &BrokerageCredentials,
        ) -> bool {
            self.credential_submits.lock().push((integration.to_string(), credentials.clone()));
            !self.reject
        }

        async fn exchange_authorization_code(&self, _request: &ExchangeRequest) -> bool {
            !self.reject
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: Mutex<Vec<Notice>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.lock().push(notice);
        }
    }

    fn service_with(
        gateway: Arc<CountingGateway>,
    ) -> (SettingsService, Arc<ConfigStore>, Arc<RecordingNotifier>) {
        let store = Arc::new(ConfigStore::hydrate(Arc::new(MemoryRepository::default())));
        let notifier = Arc::new(RecordingNotifier::default());
        let service = SettingsService::new(
            Arc::clone(&store),
            gateway as Arc<dyn ConfigGateway>,
            Arc::clone(&notifier) as Arc<dyn Notifier>,
        );
        (service, store, notifier)
    }

    #[tokio::test]
    async fn test_characters_per_second_is_clamped_at_the_edit_boundary() {
        let (service, store, _notifier) = service_with(Arc::new(CountingGateway::default()));

        service.set_characters_per_second(0).unwrap();
        assert_eq!(store.get().display.characters_per_second, 1);

        service.set_characters_per_second(11).unwrap();
        assert_eq!(store.get().display.characters_per_second, 10);

        service.set_characters_per_second(5).unwrap();
        assert_eq!(store.get().display.characters_per_second, 5);
    }

    #[tokio::test]
    async fn test_display_mutations_reach_the_store() {
        let (service, store, _notifier) = service_with(Arc::new(CountingGateway::default()));

        service.set_widget(Region::Left, Widget::Music).unwrap();
        service.set_theme(Theme::Dark).unwrap();
        service.set_orientation(Orientation::Vertical).unwrap();
        service.set_accent_color("#123456".to_string()).unwrap();

        let display = store.get().display;
        assert_eq!(display.left_widget, Widget::Music);
        assert_eq!(display.theme, Theme::Dark);
        assert_eq!(display.orientation, Orientation::Vertical);
        assert_eq!(display.accent_color, "#123456");
    }

    #[tokio::test]
    async fn test_duplicate_callback_is_rejected() {
        let (service, store, _notifier) = service_with(Arc::new(CountingGateway::default()));

        service
            .save_oauth_client(
                "spotify",
                OAuthClientConfig {
                    callback_url: "https://app.example/cb".to_string(),
                    ..Default::default()
                },
            )
            .unwrap();

        let result = service.save_oauth_client(
            "deezer",
            OAuthClientConfig {
                callback_url: "https://app.example/cb".to_string(),
                ..Default::default()
            },
        );

        assert!(matches!(result, Err(LumenError::InvalidInput(_))));
        assert!(!store.get().integrations.contains_key("deezer"));
    }

    #[tokio::test]
    async fn test_resaving_own_callback_is_allowed() {
        let (service, store, _notifier) = service_with(Arc::new(CountingGateway::default()));

        let config = OAuthClientConfig {
            client_id: "client".to_string(),
            callback_url: "https://app.example/cb".to_string(),
            ..Default::default()
        };
        service.save_oauth_client("spotify", config.clone()).unwrap();
        service.save_oauth_client("spotify", config).unwrap();

        assert_eq!(store.get().integrations["spotify"].client_id, "client");
    }

    #[tokio::test]
    async fn test_upload_display_config_notifies_outcome() {
        let gateway = Arc::new(CountingGateway::default());
        let (service, _store, notifier) = service_with(Arc::clone(&gateway));

        assert!(service.upload_display_config().await);
        assert_eq!(gateway.display_submits.lock().len(), 1);
        assert_eq!(notifier.notices.lock()[0].level, NoticeLevel::Success);

        let rejecting = Arc::new(CountingGateway { reject: true, ..Default::default() });
        let (service, _store, notifier) = service_with(Arc::clone(&rejecting));
        assert!(!service.upload_display_config().await);
        assert_eq!(notifier.notices.lock()[0].level, NoticeLevel::Error);
    }

    #[tokio::test]
    async fn test_incomplete_brokerage_credentials_skip_the_network() {
        let gateway = Arc::new(CountingGateway::default());
        let (service, _store, notifier) = service_with(Arc::clone(&gateway));

        service.set_brokerage_email("user@example.com".to_string()).unwrap();
        assert!(!service.save_brokerage_credentials().await);

        assert!(gateway.credential_submits.lock().is_empty());
        let notices = notifier.notices.lock();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Info);
    }

    #[tokio::test]
    async fn test_complete_brokerage_credentials_are_submitted() {
        let gateway = Arc::new(CountingGateway::default());
        let (service, _store, notifier) = service_with(Arc::clone(&gateway));

        service.set_brokerage_email("user@example.com".to_string()).unwrap();
        service.set_brokerage_password("hunter2".to_string()).unwrap();
        assert!(service.save_brokerage_credentials().await);

        let submits = gateway.credential_submits.lock();
        assert_eq!(submits.len(), 1);
        assert_eq!(submits[0].0, BROKERAGE_INTEGRATION);
        assert_eq!(submits[0].1.email, "user@example.com");
        assert_eq!(notifier.notices.lock()[0].level, NoticeLevel::Success);
    }

    #[test]
    fn test_default_state_is_reachable_through_store() {
        let (_, store, _) = service_with(Arc::new(CountingGateway::default()));
        assert_eq!(store.get(), PersistedState::default());
    }
}
