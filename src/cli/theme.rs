//! Theme command for composing the stylesheet alone.

use crate::cli::common::{read_generate_config, CliError, CliResult};
use crate::theme::compose_theme_stylesheet;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Compose the theme stylesheet for a branding config
#[derive(Debug, Clone, Args)]
pub struct ThemeArgs {
    /// Path to branding config JSON file
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Output path for the stylesheet (prints to stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

impl ThemeArgs {
    /// Execute the theme command
    pub fn execute(&self) -> CliResult<()> {
        let config = read_generate_config(&self.config)?;
        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid branding config: {e}")))?;

        let stylesheet = compose_theme_stylesheet(&config.theme_config());

        match &self.out {
            Some(path) => {
                fs::write(path, stylesheet).map_err(|e| {
                    CliError::io(format!("Failed to write stylesheet {}: {e}", path.display()))
                })?;
                println!("✓ Wrote theme stylesheet to: {}", path.display());
            }
            None => {
                print!("{stylesheet}");
            }
        }

        Ok(())
    }
}
