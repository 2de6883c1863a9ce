//! OAuth2 client registration types
//!
//! One [`OAuthClientConfig`] exists per third-party integration (the music
//! provider ships by default). The console never talks to the provider's
//! token endpoint itself; it hands the authorization code to the device
//! backend, which performs the server-side exchange.

use serde::{Deserialize, Serialize};

/// OAuth2 client registration for one integration.
///
/// Credentials are opaque to the console; no validation beyond emptiness
/// checks ever happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OAuthClientConfig {
    /// Client identifier issued by the provider.
    pub client_id: String,
    /// Client secret issued by the provider.
    pub client_secret: String,
    /// Provider page the user is sent to for consent. Used only for
    /// outbound navigation, never for callback matching.
    pub authorize_url: String,
    /// Origin + path the provider redirects back to. Matched against the
    /// observed location with query and fragment ignored.
    pub callback_url: String,
    /// Device backend endpoint that performs the code-for-token exchange.
    pub get_token_url: String,
    /// Most recent authorization code that was successfully exchanged.
    /// Empty until the first exchange. Deduplicates exchange attempts.
    pub last_code: String,
}

impl OAuthClientConfig {
    /// Whether both client credentials have been entered.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

/// Login credentials for the brokerage integration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrokerageCredentials {
    pub email: String,
    pub password: String,
}

impl BrokerageCredentials {
    /// Whether both fields have been entered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

/// Payload of the backend code-for-token exchange call.
///
/// Serializes directly as the `POST /oauth2/code` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRequest {
    /// Authorization code extracted from the provider redirect.
    pub code: String,
    /// Integration the code belongs to (e.g. `spotify`).
    pub app_name: String,
    pub client_id: String,
    pub client_secret: String,
    /// Callback URL the code was delivered to; providers require it to be
    /// repeated verbatim during the exchange.
    pub redirect_uri: String,
    /// Backend endpoint that performs the provider exchange server-side.
    pub get_token_url: String,
}
