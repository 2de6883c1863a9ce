//! Commands the UI layer invokes
//!
//! Thin wrappers over the settings service and the store. The form and
//! navigation chrome around the core is an external collaborator; these
//! functions are the whole surface it needs.

use lumen_domain::{OAuthClientConfig, Orientation, PersistedState, Region, Result, Theme, Widget};
use tracing::info;

use crate::context::AppContext;

/// Snapshot of the persisted state for rendering.
#[must_use]
pub fn current_state(ctx: &AppContext) -> PersistedState {
    ctx.store.get()
}

/// Assign a widget to a display region.
///
/// # Errors
/// Returns an error when persisting fails.
pub fn set_widget(ctx: &AppContext, region: Region, widget: Widget) -> Result<()> {
    ctx.settings.set_widget(region, widget)
}

/// Set the display color scheme.
///
/// # Errors
/// Returns an error when persisting fails.
pub fn set_theme(ctx: &AppContext, theme: Theme) -> Result<()> {
    ctx.settings.set_theme(theme)
}

/// Set the display orientation.
///
/// # Errors
/// Returns an error when persisting fails.
pub fn set_orientation(ctx: &AppContext, orientation: Orientation) -> Result<()> {
    ctx.settings.set_orientation(orientation)
}

/// Set the accent color.
///
/// # Errors
/// Returns an error when persisting fails.
pub fn set_accent_color(ctx: &AppContext, accent_color: String) -> Result<()> {
    ctx.settings.set_accent_color(accent_color)
}

/// Set the text-rendering speed (clamped to the accepted range).
///
/// # Errors
/// Returns an error when persisting fails.
pub fn set_characters_per_second(ctx: &AppContext, value: u8) -> Result<()> {
    ctx.settings.set_characters_per_second(value)
}

/// Save an integration's OAuth client registration.
///
/// # Errors
/// Returns an error on a duplicate callback URL or when persisting fails.
pub fn save_oauth_client(
    ctx: &AppContext,
    integration: &str,
    config: OAuthClientConfig,
) -> Result<()> {
    info!(integration, "saving OAuth client registration");
    ctx.settings.save_oauth_client(integration, config)
}

/// Set the brokerage login email.
///
/// # Errors
/// Returns an error when persisting fails.
pub fn set_brokerage_email(ctx: &AppContext, email: String) -> Result<()> {
    ctx.settings.set_brokerage_email(email)
}

/// Set the brokerage login password.
///
/// # Errors
/// Returns an error when persisting fails.
pub fn set_brokerage_password(ctx: &AppContext, password: String) -> Result<()> {
    ctx.settings.set_brokerage_password(password)
}

/// Push the display configuration to the device backend.
pub async fn upload_display_config(ctx: &AppContext) -> bool {
    info!("uploading display configuration");
    ctx.settings.upload_display_config().await
}

/// Submit the stored brokerage credentials to the backend.
pub async fn save_brokerage_credentials(ctx: &AppContext) -> bool {
    info!("submitting brokerage credentials");
    ctx.settings.save_brokerage_credentials().await
}
