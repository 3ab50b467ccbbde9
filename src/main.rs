//! Brandforge - Client workspace generator
//!
//! Command-line entry point. Every subcommand runs headless and reports
//! failures through `CliError`, which maps onto stable process exit codes
//! for scripting: 0 success, 1 validation error, 2 I/O error.

use clap::{Parser, Subcommand};

use brandforge::cli::{
    ConfigArgs, DoctorArgs, FontsArgs, GenerateArgs, PalettesArgs, ThemeArgs, ValidateArgs,
};
use brandforge::constants::{APP_BINARY_NAME, APP_DESCRIPTION};

/// Brandforge - turn a client branding brief into a zipped dashboard workspace
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a branded workspace archive from a branding config
    Generate(GenerateArgs),
    /// Validate a branding config without generating anything
    Validate(ValidateArgs),
    /// Compose the theme stylesheet for a branding config
    Theme(ThemeArgs),
    /// List the built-in neutral and chart palettes
    Palettes(PalettesArgs),
    /// List the supported font choices
    Fonts(FontsArgs),
    /// Check that the template environment is ready for generation
    Doctor(DoctorArgs),
    /// Show or change the application configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::Theme(args) => args.execute(),
        Commands::Palettes(args) => args.execute(),
        Commands::Fonts(args) => args.execute(),
        Commands::Doctor(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }
}
