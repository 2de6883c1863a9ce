//! Display and widget configuration for the IoT screen
//!
//! The physical display renders three widget regions side by side (or
//! stacked, depending on orientation). Everything here serializes with the
//! exact field and variant names the device backend expects.

use serde::{Deserialize, Serialize};

use crate::constants::{CHARACTERS_PER_SECOND_DEFAULT, DEFAULT_ACCENT_COLOR};

/// Content module assignable to one of the three screen regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Widget {
    /// Region stays blank.
    #[default]
    None,
    /// Currently-playing track from the configured music provider.
    Music,
    /// Current weather conditions.
    Weather,
    /// Brokerage portfolio summary.
    Brokerage,
    /// Wall clock.
    Clock,
}

/// Color scheme of the rendered screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Physical mounting orientation of the display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// One of the three widget regions on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Left,
    Center,
    Right,
}

/// Widget assignment and appearance settings for the display.
///
/// Field names follow the device backend's JSON contract, so this struct
/// doubles as the `POST /dashboard/config` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayConfig {
    pub left_widget: Widget,
    pub center_widget: Widget,
    pub right_widget: Widget,
    pub theme: Theme,
    pub orientation: Orientation,
    /// Accent color as a `#rrggbb` hex string.
    pub accent_color: String,
    /// Speed at which text scrolls on the device, in characters per second.
    /// Callers clamp to the accepted range before writing.
    pub characters_per_second: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            left_widget: Widget::None,
            center_widget: Widget::None,
            right_widget: Widget::None,
            theme: Theme::Light,
            orientation: Orientation::Horizontal,
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            characters_per_second: CHARACTERS_PER_SECOND_DEFAULT,
        }
    }
}

impl DisplayConfig {
    /// Get the widget assigned to a region.
    #[must_use]
    pub fn widget(&self, region: Region) -> Widget {
        match region {
            Region::Left => self.left_widget,
            Region::Center => self.center_widget,
            Region::Right => self.right_widget,
        }
    }

    /// Assign a widget to a region.
    pub fn set_widget(&mut self, region: Region, widget: Widget) {
        match region {
            Region::Left => self.left_widget = widget,
            Region::Center => self.center_widget = widget,
            Region::Right => self.right_widget = widget,
        }
    }
}
