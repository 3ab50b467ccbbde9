//! Application identity constants.
//!
//! Centralizes the strings that name the application (display name, binary
//! name, config directory) so a rename touches exactly one file.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "Brandforge";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "brandforge";

/// The directory name for application data (config file).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "brandforge";

/// Short description for package metadata and help text.
pub const APP_DESCRIPTION: &str =
    "Turn a client branding brief into a ready-to-build, zipped dashboard workspace";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_consistency() {
        assert_eq!(APP_BINARY_NAME, APP_BINARY_NAME.to_lowercase());
        assert!(!APP_BINARY_NAME.contains(' '));
        assert!(!APP_DATA_DIR.contains(' '));
    }
}
