//! Environment checking for workspace generation.
//!
//! This module validates that the template environment is in a usable state
//! before a generation run: the template root resolves, the workspace
//! template carries the files the pipeline rewrites, and the deploy
//! templates are present.
//!
//! # Example
//!
//! ```rust
//! use brandforge::doctor::{CheckStatus, EnvironmentChecker};
//!
//! let checker = EnvironmentChecker::new();
//! let results = checker.check_all(None);
//!
//! for result in &results {
//!     match result.status {
//!         CheckStatus::Passed => println!("✓ {}: {}", result.name, result.message),
//!         CheckStatus::Failed => println!("✗ {}: {}", result.name, result.message),
//!         CheckStatus::Warning => println!("⚠ {}: {}", result.name, result.message),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! The checker is designed to be resilient: a broken config file or missing
//! template never panics and never aborts the remaining checks. Each check
//! reports a structured result instead.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::workspace::template;

/// Status of a single environment check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed
    Passed,
    /// Required element is missing or broken
    Failed,
    /// Degraded but generation can proceed
    Warning,
}

/// Result of a single environment check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check (e.g., "Template root", "Entry file")
    pub name: String,
    /// Outcome of the check
    pub status: CheckStatus,
    /// Human-readable message about the outcome
    pub message: String,
}

impl CheckResult {
    /// Creates a new check result.
    #[must_use]
    pub fn new(name: impl Into<String>, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            message: message.into(),
        }
    }

    /// Creates a passed result.
    #[must_use]
    pub fn passed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Passed, message)
    }

    /// Creates a failed result.
    #[must_use]
    pub fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Failed, message)
    }

    /// Creates a warning result.
    #[must_use]
    pub fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Warning, message)
    }
}

/// Checker for the workspace generation environment.
#[derive(Debug, Default)]
pub struct EnvironmentChecker;

impl EnvironmentChecker {
    /// Creates a new environment checker.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Runs all environment checks and returns their results.
    ///
    /// # Arguments
    ///
    /// * `explicit_root` - Template root from the command line, if given
    pub fn check_all(&self, explicit_root: Option<&Path>) -> Vec<CheckResult> {
        let (config_check, config) = Self::check_app_config();
        let resolution = template::resolve_template_root(
            explicit_root,
            config.paths.template_root.as_deref(),
        );

        let root_check = match &resolution {
            Ok(root) => CheckResult::passed(
                "Template root",
                format!("Resolved to {}", root.display()),
            ),
            Err(e) => CheckResult::failed("Template root", format!("{e:#}")),
        };
        let root = resolution.ok();

        vec![
            config_check,
            root_check,
            Self::check_entry_file(root.as_deref()),
            Self::check_font_markers(root.as_deref()),
            Self::check_stylesheet(root.as_deref()),
            Self::check_deploy_templates(root.as_deref()),
        ]
    }

    /// Checks whether the app config file loads cleanly.
    ///
    /// A missing file is fine (defaults apply). An unreadable or invalid
    /// file is a warning since every command falls back to defaults.
    fn check_app_config() -> (CheckResult, Config) {
        let path_label = Config::config_file_path()
            .map_or_else(|_| "config.toml".to_string(), |p| p.display().to_string());

        if !Config::exists() {
            return (
                CheckResult::passed("App config", "No config file (using defaults)"),
                Config::default(),
            );
        }

        match Config::load() {
            Ok(config) => (
                CheckResult::passed("App config", format!("Loaded from {path_label}")),
                config,
            ),
            Err(e) => (
                CheckResult::warning("App config", format!("Ignoring {path_label}: {e:#}")),
                Config::default(),
            ),
        }
    }

    /// Checks that the workspace template carries the layout entry file.
    ///
    /// The pipeline splices font fragments and patches favicon metadata
    /// into this file, so its absence means a broken template.
    fn check_entry_file(root: Option<&Path>) -> CheckResult {
        let Some(root) = root else {
            return CheckResult::failed("Entry file", "Template root not resolved");
        };

        let entry = template::workspace_template_dir(root).join(template::ENTRY_FILE);
        if entry.is_file() {
            CheckResult::passed("Entry file", format!("Found {}", template::ENTRY_FILE))
        } else {
            CheckResult::failed(
                "Entry file",
                format!("Missing {} in workspace template", template::ENTRY_FILE),
            )
        }
    }

    /// Checks that the entry file still carries the three font markers.
    fn check_font_markers(root: Option<&Path>) -> CheckResult {
        let Some(root) = root else {
            return CheckResult::warning("Font markers", "Template root not resolved");
        };

        let entry = template::workspace_template_dir(root).join(template::ENTRY_FILE);
        let Ok(content) = fs::read_to_string(&entry) else {
            return CheckResult::warning("Font markers", "Entry file not readable, markers not checked");
        };

        let markers = [
            template::FONT_IMPORTS_MARKER,
            template::FONT_DECLARATIONS_MARKER,
            template::FONT_VARIABLES_MARKER,
        ];
        let missing: Vec<&str> = markers
            .iter()
            .filter(|marker| !content.contains(**marker))
            .copied()
            .collect();

        if missing.is_empty() {
            CheckResult::passed("Font markers", "All three markers present")
        } else {
            CheckResult::warning(
                "Font markers",
                format!("Missing markers (splice will skip them): {}", missing.join(", ")),
            )
        }
    }

    /// Checks for the stylesheet placeholder.
    ///
    /// Generation overwrites it either way, so absence is only a warning.
    fn check_stylesheet(root: Option<&Path>) -> CheckResult {
        let Some(root) = root else {
            return CheckResult::warning("Stylesheet", "Template root not resolved");
        };

        let stylesheet = template::workspace_template_dir(root).join(template::STYLESHEET_FILE);
        if stylesheet.is_file() {
            CheckResult::passed("Stylesheet", format!("Found {}", template::STYLESHEET_FILE))
        } else {
            CheckResult::warning(
                "Stylesheet",
                format!(
                    "Missing {} placeholder (will be created on generation)",
                    template::STYLESHEET_FILE
                ),
            )
        }
    }

    /// Checks that the fixed deploy template files are present.
    fn check_deploy_templates(root: Option<&Path>) -> CheckResult {
        let Some(root) = root else {
            return CheckResult::warning("Deploy templates", "Template root not resolved");
        };

        let deploy_dir = template::deploy_template_dir(root);
        let missing: Vec<&str> = template::DEPLOY_FILES
            .iter()
            .filter(|name| !deploy_dir.join(name).is_file())
            .copied()
            .collect();

        if missing.is_empty() {
            CheckResult::passed(
                "Deploy templates",
                format!("All {} files present", template::DEPLOY_FILES.len()),
            )
        } else {
            CheckResult::warning(
                "Deploy templates",
                format!("Missing (generation will skip them): {}", missing.join(", ")),
            )
        }
    }
}

/// Convenience for exit-code decisions: true when any required check failed.
#[must_use]
pub fn has_failures(results: &[CheckResult]) -> bool {
    results.iter().any(|r| r.status == CheckStatus::Failed)
}
