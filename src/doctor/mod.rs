//! Environment checking and validation.
//!
//! This module provides tools to check that the template environment is
//! properly set up before generating client workspaces.

pub mod checker;
pub mod formatter;

// Re-export checker and formatter types
pub use checker::{has_failures, CheckResult, CheckStatus, EnvironmentChecker};
pub use formatter::{DoctorFormatter, OutputFormat};
