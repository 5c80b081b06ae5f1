//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "kitbox";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "kitbox";

/// Default silent-reading rate used for reading-time estimates.
pub const DEFAULT_READING_WPM: u32 = 200;

/// Default speaking rate used for speaking-time estimates.
pub const DEFAULT_SPEAKING_WPM: u32 = 130;

/// Default number of decimal places shown for conversion results.
pub const DEFAULT_PRECISION: usize = 6;
