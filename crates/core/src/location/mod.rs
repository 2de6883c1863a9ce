//! Location observation
//!
//! Watches the embedding surface's current URL and republishes it as a
//! reactive value. OAuth redirects commonly change only the query string
//! without a page reload, so consumers must receive an event for every
//! navigation, not a one-shot read at startup; [`LocationObserver`] is the
//! push side the embedding feeds, and its `watch` channel is the reactive
//! side consumers subscribe to.

use std::collections::BTreeMap;

use lumen_domain::{LumenError, Result};
use tokio::sync::watch;
use url::Url;

/// A parsed navigation target: origin + path plus its query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Origin and path with query string and fragment stripped.
    pub base: String,
    /// Query parameters; keys are unique, the last occurrence wins.
    pub params: BTreeMap<String, String>,
}

impl Location {
    /// Parse an absolute URL into its base and query parameters.
    ///
    /// # Errors
    /// Returns `LumenError::InvalidInput` for anything `url` cannot parse
    /// as an absolute URL.
    pub fn parse(raw: &str) -> Result<Self> {
        let url = Url::parse(raw)
            .map_err(|err| LumenError::InvalidInput(format!("invalid URL {raw:?}: {err}")))?;

        let base = format!("{}{}", url.origin().ascii_serialization(), url.path());

        let mut params = BTreeMap::new();
        for (key, value) in url.query_pairs() {
            // Last occurrence wins on duplicate keys.
            params.insert(key.into_owned(), value.into_owned());
        }

        Ok(Self { base, params })
    }

    /// Look up a query parameter.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Strip query and fragment from a configured callback URL.
///
/// Returns `None` when the value is empty or not an absolute URL; such
/// callbacks never match any observed location.
#[must_use]
pub fn callback_base(callback_url: &str) -> Option<String> {
    if callback_url.is_empty() {
        return None;
    }
    Location::parse(callback_url).ok().map(|location| location.base)
}

/// Reactive source of navigation events.
///
/// The embedding surface calls [`navigate`](Self::navigate) on every URL
/// change (including query-string-only changes); every call notifies all
/// subscribers, even when the URL is unchanged, mirroring how the original
/// console re-evaluated on every render tick.
pub struct LocationObserver {
    tx: watch::Sender<Option<Location>>,
}

impl Default for LocationObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationObserver {
    /// Create an observer with no location observed yet.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Record a navigation to `url` and notify subscribers.
    ///
    /// # Errors
    /// Returns `LumenError::InvalidInput` when `url` is not an absolute
    /// URL; subscribers are not notified in that case.
    pub fn navigate(&self, url: &str) -> Result<()> {
        let location = Location::parse(url)?;
        self.tx.send_replace(Some(location));
        Ok(())
    }

    /// The most recently observed location, if any.
    #[must_use]
    pub fn current(&self) -> Option<Location> {
        self.tx.borrow().clone()
    }

    /// Subscribe to navigation events.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Location>> {
        self.tx.subscribe()
    }
}
