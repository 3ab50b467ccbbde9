//! Output formatting for environment check results.
//!
//! This module provides user-friendly formatting of check results with:
//! - Clear visual indicators (✓/✗/⚠)
//! - Remedy hints for failed checks
//! - Summary section with overall status
//!
//! # Example
//!
//! ```rust
//! use brandforge::doctor::{DoctorFormatter, EnvironmentChecker};
//!
//! let checker = EnvironmentChecker::new();
//! let results = checker.check_all(None);
//!
//! let formatter = DoctorFormatter::new();
//! let output = formatter.format_results(&results);
//! println!("{}", output);
//! ```

use crate::doctor::{CheckResult, CheckStatus};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Output format for doctor results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Terminal,
    /// Machine-readable JSON output
    Json,
}

/// JSON output structure for doctor results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Overall health status
    pub status: String,
    /// Number of passed checks
    pub passed: usize,
    /// Number of failed checks
    pub failed: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Individual check results
    pub checks: Vec<JsonCheck>,
}

/// JSON representation of a single check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonCheck {
    /// Check name
    pub name: String,
    /// Status (passed, failed, warning)
    pub status: String,
    /// Status message
    pub message: String,
    /// Remedy hint if the check failed
    pub remedy: Option<String>,
}

/// Formatter for environment check results.
#[derive(Debug)]
pub struct DoctorFormatter {
    /// Output format
    format: OutputFormat,
}

impl DoctorFormatter {
    /// Creates a new formatter with terminal output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            format: OutputFormat::Terminal,
        }
    }

    /// Creates a new formatter with specified output format.
    #[must_use]
    pub fn with_format(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats check results into a human-readable or JSON string.
    pub fn format_results(&self, results: &[CheckResult]) -> String {
        match self.format {
            OutputFormat::Terminal => Self::format_terminal(results),
            OutputFormat::Json => Self::format_json(results),
        }
    }

    /// Formats results as human-readable terminal output.
    fn format_terminal(results: &[CheckResult]) -> String {
        let mut output = String::new();

        // Header
        output.push_str("Brandforge Environment Status\n");
        output.push_str("═════════════════════════════\n\n");

        let (passed, failed, warnings) = count_statuses(results);

        // Individual checks
        for result in results {
            let (symbol, status_text) = match result.status {
                CheckStatus::Passed => ("✓", "OK"),
                CheckStatus::Failed => ("✗", "FAILED"),
                CheckStatus::Warning => ("⚠", "WARNING"),
            };

            // Format: ✓ Template root ........ OK
            let name_width: usize = 20;
            let dots = ".".repeat(name_width.saturating_sub(result.name.len()));
            write!(output, "{} {}{} {}", symbol, result.name, dots, status_text)
                .expect("Writing to String should not fail");
            output.push('\n');

            // Add remedy hints for failed checks
            if result.status == CheckStatus::Failed {
                if let Some(remedy) = remedy_hint(&result.name) {
                    output.push_str("    Fix: ");
                    output.push_str(remedy);
                    output.push('\n');
                }
            }

            // Add details for anything that is not a clean pass
            if result.status == CheckStatus::Passed {
                output.push('\n');
            } else {
                let indented = result
                    .message
                    .lines()
                    .map(|line| format!("    {line}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                output.push_str(&indented);
                output.push_str("\n\n");
            }
        }

        // Summary
        output.push_str("─────────────────────────────\n");
        write!(output, "Summary: {passed} passed").expect("Writing to String should not fail");
        if failed > 0 {
            write!(output, ", {failed} failed").expect("Writing to String should not fail");
        }
        if warnings > 0 {
            write!(output, ", {warnings} warnings").expect("Writing to String should not fail");
        }
        output.push('\n');

        // Overall status
        if failed == 0 && warnings == 0 {
            output.push_str("\n✓ Environment is ready!\n");
            output.push_str("  You can now generate client workspaces.\n");
        } else if failed > 0 {
            output.push_str("\n✗ Required checks failed\n");
            output.push_str("  Fix the issues above and run 'doctor' again.\n");
        } else {
            output.push_str("\n⚠ Some checks reported warnings\n");
            output.push_str("  Generation will proceed but review the notes above.\n");
        }

        output
    }

    /// Formats results as JSON for machine-readable output.
    fn format_json(results: &[CheckResult]) -> String {
        let (passed, failed, warnings) = count_statuses(results);

        let overall_status = if failed == 0 && warnings == 0 {
            "ready"
        } else if failed > 0 {
            "failed_checks"
        } else {
            "warnings"
        };

        let checks: Vec<JsonCheck> = results
            .iter()
            .map(|r| JsonCheck {
                name: r.name.clone(),
                status: match r.status {
                    CheckStatus::Passed => "passed".to_string(),
                    CheckStatus::Failed => "failed".to_string(),
                    CheckStatus::Warning => "warning".to_string(),
                },
                message: r.message.clone(),
                remedy: if r.status == CheckStatus::Failed {
                    remedy_hint(&r.name).map(String::from)
                } else {
                    None
                },
            })
            .collect();

        let json_output = JsonOutput {
            status: overall_status.to_string(),
            passed,
            failed,
            warnings,
            checks,
        };

        serde_json::to_string_pretty(&json_output).unwrap_or_else(|_| {
            r#"{"status":"error","message":"Failed to serialize JSON output"}"#.to_string()
        })
    }
}

impl Default for DoctorFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn count_statuses(results: &[CheckResult]) -> (usize, usize, usize) {
    let passed = results
        .iter()
        .filter(|r| r.status == CheckStatus::Passed)
        .count();
    let failed = results
        .iter()
        .filter(|r| r.status == CheckStatus::Failed)
        .count();
    let warnings = results
        .iter()
        .filter(|r| r.status == CheckStatus::Warning)
        .count();
    (passed, failed, warnings)
}

/// Gets a remedy hint for a failed check.
fn remedy_hint(name: &str) -> Option<&'static str> {
    match name {
        "Template root" => {
            Some("Pass --template-root DIR or run: brandforge config set --template-root DIR")
        }
        "Entry file" => Some("Restore app/layout.tsx in the workspace template"),
        "Font markers" => Some("Re-add the __FONT_* marker comments to app/layout.tsx"),
        "Deploy templates" => Some("Restore the missing files under the deploy/ template"),
        _ => None,
    }
}
