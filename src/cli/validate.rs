//! Validation command for branding config files.

use crate::cli::common::{read_generate_config, CliError, CliResult};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate a branding config file for errors and warnings
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to branding config JSON file
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

/// JSON-serializable validation report
#[derive(Serialize, Debug)]
struct ValidationResponse {
    valid: bool,
    errors: Vec<ValidationMessage>,
    checks: ValidationChecks,
}

#[derive(Serialize, Debug)]
struct ValidationMessage {
    severity: String,
    message: String,
}

#[derive(Serialize, Debug)]
struct ValidationChecks {
    identity: String,
    brand_colors: String,
    fonts: String,
}

impl ValidationChecks {
    fn all_passed() -> Self {
        Self {
            identity: "passed".to_string(),
            brand_colors: "passed".to_string(),
            fonts: "passed".to_string(),
        }
    }
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let config = read_generate_config(&self.config)?;

        let mut checks = ValidationChecks::all_passed();
        let mut messages = Vec::new();

        // Structural validation stops at the first hard error
        if let Err(e) = config.validate() {
            let message = format!("{e}");
            if message.contains("Font") || message.contains("font") {
                checks.fonts = "failed".to_string();
            } else {
                checks.identity = "failed".to_string();
            }
            messages.push(ValidationMessage {
                severity: "error".to_string(),
                message,
            });
        }

        // Non-fatal issues the pipeline would silently absorb
        for warning in config.warnings() {
            if warning.contains("brand color") {
                checks.brand_colors = "warning".to_string();
            } else {
                checks.fonts = "warning".to_string();
            }
            messages.push(ValidationMessage {
                severity: "warning".to_string(),
                message: warning,
            });
        }

        let valid = !messages.iter().any(|m| m.severity == "error");
        let response = ValidationResponse {
            valid,
            errors: messages,
            checks,
        };

        // Output results
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            // Human-readable output
            if response.valid {
                println!("✓ Validation passed");
            } else {
                println!("✗ Validation failed");
            }

            println!("\nChecks:");
            println!("  Identity:     {}", response.checks.identity);
            println!("  Brand colors: {}", response.checks.brand_colors);
            println!("  Fonts:        {}", response.checks.fonts);

            if !response.errors.is_empty() {
                println!("\nIssues:");
                for msg in &response.errors {
                    let prefix = if msg.severity == "error" {
                        "  ✗"
                    } else {
                        "  ⚠"
                    };
                    println!("{} {}", prefix, msg.message);
                }
            }
        }

        // Exit code
        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }

        if self.strict {
            let has_warnings = response.errors.iter().any(|m| m.severity == "warning");
            if has_warnings {
                return Err(CliError::validation("Warnings found in strict mode"));
            }
        }

        Ok(())
    }
}
