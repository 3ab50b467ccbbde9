//! Palette listing command.

use crate::cli::common::{CliError, CliResult};
use crate::models::{ChartPalette, NeutralPalette, PaletteScale};
use clap::Args;
use serde::Serialize;

/// List the available neutral and chart palettes
#[derive(Debug, Clone, Args)]
pub struct PalettesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ShadeItem {
    shade: u16,
    value: String,
}

#[derive(Debug, Serialize)]
struct PaletteItem {
    name: String,
    shades: Vec<ShadeItem>,
}

#[derive(Debug, Serialize)]
struct ListPalettesResponse {
    neutrals: Vec<PaletteItem>,
    charts: Vec<PaletteItem>,
}

fn palette_item(scale: &PaletteScale) -> PaletteItem {
    PaletteItem {
        name: scale.name().to_string(),
        shades: scale
            .entries()
            .map(|(shade, value)| ShadeItem {
                shade,
                value: value.to_string(),
            })
            .collect(),
    }
}

impl PalettesArgs {
    /// Execute the palettes command
    pub fn execute(&self) -> CliResult<()> {
        let response = ListPalettesResponse {
            neutrals: NeutralPalette::ALL
                .iter()
                .map(|p| palette_item(p.scale()))
                .collect(),
            charts: ChartPalette::ALL
                .iter()
                .map(|p| palette_item(p.scale()))
                .collect(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Neutral palettes ({}):", response.neutrals.len());
            for palette in &response.neutrals {
                print_palette(palette);
            }

            println!();
            println!("Chart palettes ({}):", response.charts.len());
            for palette in &response.charts {
                print_palette(palette);
            }
        }

        Ok(())
    }
}

fn print_palette(palette: &PaletteItem) {
    println!();
    println!("  {}:", palette.name);
    for shade in &palette.shades {
        println!("    {:>3}: {}", shade.shade, shade.value);
    }
}
