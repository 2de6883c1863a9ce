//! Domain constants shared across crates

/// Schema version stamped into the persisted state envelope.
///
/// Bump whenever the shape of [`crate::PersistedState`] changes in a way a
/// previous build cannot read. Hydration resets to defaults on mismatch.
pub const SCHEMA_VERSION: u32 = 1;

/// File name of the persisted state blob inside the state directory.
pub const STATE_FILE_NAME: &str = "app-store.json";

/// Integration name of the music provider the console ships with.
pub const MUSIC_INTEGRATION: &str = "spotify";

/// Integration name of the brokerage provider.
pub const BROKERAGE_INTEGRATION: &str = "xtb";

/// Lowest accepted text-rendering speed on the device.
pub const CHARACTERS_PER_SECOND_MIN: u8 = 1;

/// Highest accepted text-rendering speed on the device.
pub const CHARACTERS_PER_SECOND_MAX: u8 = 10;

/// Text-rendering speed a fresh installation starts with.
pub const CHARACTERS_PER_SECOND_DEFAULT: u8 = 2;

/// Accent color a fresh installation starts with.
pub const DEFAULT_ACCENT_COLOR: &str = "#ffffff";
