//! Font listing command.

use crate::cli::common::{CliError, CliResult};
use crate::models::{FONT_TABLE, SYSTEM_FONT};
use clap::Args;
use serde::Serialize;

/// List the fonts available for workspace generation
#[derive(Debug, Clone, Args)]
pub struct FontsArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct FontItem {
    name: String,
    import: String,
}

#[derive(Debug, Serialize)]
struct ListFontsResponse {
    fonts: Vec<FontItem>,
    count: usize,
}

impl FontsArgs {
    /// Execute the fonts command
    pub fn execute(&self) -> CliResult<()> {
        let fonts: Vec<FontItem> = FONT_TABLE
            .iter()
            .map(|entry| FontItem {
                name: entry.display_name.to_string(),
                import: entry.import_ident.to_string(),
            })
            .collect();

        let response = ListFontsResponse {
            count: fonts.len(),
            fonts,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Available fonts ({}):", response.count);
            println!();
            for font in &response.fonts {
                println!("  {:<20} next/font/google: {}", font.name, font.import);
            }
            println!();
            println!("Use \"{SYSTEM_FONT}\" to skip Google Font loading entirely.");
        }

        Ok(())
    }
}
