//! Domain type definitions

pub mod display;
pub mod oauth;
pub mod state;

pub use display::{DisplayConfig, Orientation, Region, Theme, Widget};
pub use oauth::{BrokerageCredentials, ExchangeRequest, OAuthClientConfig};
pub use state::{PersistedState, StateEnvelope};
