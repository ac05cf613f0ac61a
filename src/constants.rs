//! Component Constants
//!
//! Centralized defaults shared by components and the gallery.

/// Pages shown on each side of the current page
pub const DEFAULT_SIBLING_COUNT: i64 = 1;

/// Pages always shown at each end of the pager
pub const DEFAULT_BOUNDARY_COUNT: i64 = 1;

/// Number of cells in a pin input
pub const DEFAULT_PIN_LENGTH: usize = 4;

/// Placeholder shown in empty pin cells
pub const DEFAULT_PIN_PLACEHOLDER: &str = "○";

/// How long a copy button stays in the copied state
pub const DEFAULT_COPY_TIMEOUT_MS: u64 = 1000;

/// Rating symbols
pub const DEFAULT_RATING_COUNT: usize = 5;

/// Color picker swatch grid width
pub const DEFAULT_SWATCHES_PER_ROW: usize = 10;

/// Tooltip distance from its trigger
pub const DEFAULT_TOOLTIP_OFFSET: f32 = 5.0;
pub const DEFAULT_TOOLTIP_GUTTER: f32 = 5.0;

/// Gallery window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;

/// Settings file read by the gallery
pub const SETTINGS_FILE_NAME: &str = "gallery.toml";

/// Environment variable overriding the settings file location
pub const SETTINGS_ENV_VAR: &str = "LOOM_UI_CONFIG";
