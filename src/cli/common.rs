//! Shared types for CLI command handlers.
//!
//! Commands return [`CliResult`] so the binary entry point can map failures
//! to stable process exit codes: 0 for success, 1 for validation problems,
//! 2 for I/O problems.

use crate::models::GenerateConfig;
use std::fmt;
use std::fs;
use std::path::Path;

/// Process exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success,
    /// Input or environment failed validation
    ValidationError,
    /// A filesystem or serialization operation failed
    IoError,
}

impl ExitCode {
    /// Numeric code handed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::ValidationError => 1,
            Self::IoError => 2,
        }
    }
}

/// Error type for CLI command handlers.
#[derive(Debug, Clone)]
pub enum CliError {
    /// Invalid input, configuration, or environment
    Validation(String),
    /// Filesystem or serialization failure
    Io(String),
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// The exit code this error maps to.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Validation(_) => ExitCode::ValidationError,
            Self::Io(_) => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) | Self::Io(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Reads and parses a branding config file.
///
/// A missing or unreadable file is an I/O error; malformed JSON is a
/// validation error since the file content is user input.
pub fn read_generate_config(path: &Path) -> CliResult<GenerateConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::io(format!("Failed to read config file {}: {e}", path.display()))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        CliError::validation(format!(
            "Failed to parse config file {}: {e}",
            path.display()
        ))
    })
}
