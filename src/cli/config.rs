//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::workspace::template::WORKSPACE_DIR;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Template root directory containing workspace/ and deploy/
    #[arg(long, value_name = "DIR")]
    template_root: Option<PathBuf>,

    /// Directory where generated archives are written
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    paths: PathsOutput,
    output: OutputOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    template_root: Option<String>,
}

#[derive(Serialize, Debug)]
struct OutputOutput {
    dir: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.template_root.is_none() && self.output_dir.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --template-root or --output-dir",
            ));
        }

        // Load current configuration
        let mut config = Config::load().unwrap_or_default();

        // Validate and apply template_root if provided
        if let Some(path) = &self.template_root {
            if !path.exists() {
                return Err(CliError::validation(format!(
                    "Template root does not exist: {}",
                    path.display()
                )));
            }

            if !path.join(WORKSPACE_DIR).is_dir() {
                return Err(CliError::validation(format!(
                    "Template root is invalid: {}/ directory not found at {}",
                    WORKSPACE_DIR,
                    path.join(WORKSPACE_DIR).display()
                )));
            }

            config.paths.template_root = Some(path.clone());
        }

        // Apply output_dir if provided (create if doesn't exist)
        if let Some(path) = &self.output_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create output directory {}: {e}",
                    path.display()
                ))
            })?;

            config.output.dir.clone_from(path);
        }

        // Save configuration
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        paths: PathsOutput {
            template_root: config
                .paths
                .template_root
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
        output: OutputOutput {
            dir: config.output.dir.to_string_lossy().to_string(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Brandforge Configuration");
    println!("========================");
    println!();

    println!("Paths:");
    if let Some(template_root) = &config.paths.template_root {
        println!("  Template Root: {}", template_root.display());
    } else {
        println!("  Template Root: (not configured)");
    }
    println!();

    println!("Output:");
    println!("  Archive Directory: {}", config.output.dir.display());
    println!();
}
