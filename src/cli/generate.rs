//! Generate command for client workspace archives.

use crate::cli::common::{read_generate_config, CliError, CliResult};
use crate::config::Config;
use crate::workspace::materializer::{
    generate_workspace, generate_workspace_keeping_scratch, GeneratedArchive,
};
use crate::workspace::template::resolve_template_root;
use clap::Args;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Generate a branded client workspace archive
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to branding config JSON file
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Output directory for the generated archive
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Template root directory (overrides app config)
    #[arg(long, value_name = "DIR")]
    pub template_root: Option<PathBuf>,

    /// Write progress log to a file instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Skip scratch teardown and print the workspace path
    #[arg(long)]
    pub keep_workspace: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        // Load and validate the branding config
        let config = read_generate_config(&self.config)?;
        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid branding config: {e}")))?;

        // Resolve template root: flag, then app config, then search
        let app_config = Config::load().unwrap_or_default();
        let template_root = resolve_template_root(
            self.template_root.as_deref(),
            app_config.paths.template_root.as_deref(),
        )
        .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let out_dir = self
            .out
            .clone()
            .unwrap_or_else(|| app_config.output.dir.clone());
        fs::create_dir_all(&out_dir)
            .map_err(|e| CliError::io(format!("Failed to create output directory: {e}")))?;

        // Log sink: file when requested, stderr otherwise
        let mut sink: Box<dyn Write> = match &self.log {
            Some(path) => Box::new(fs::File::create(path).map_err(|e| {
                CliError::io(format!("Failed to create log file {}: {e}", path.display()))
            })?),
            None => Box::new(io::stderr()),
        };

        for warning in config.warnings() {
            let _ = writeln!(sink, "[WARN] {warning}");
        }

        // Run the pipeline
        let (archive, scratch) = if self.keep_workspace {
            let (archive, scratch) =
                generate_workspace_keeping_scratch(&config, &template_root, &mut sink)
                    .map_err(|e| CliError::io(format!("Generation failed: {e:#}")))?;
            (archive, Some(scratch))
        } else {
            let archive = generate_workspace(&config, &template_root, &mut sink)
                .map_err(|e| CliError::io(format!("Generation failed: {e:#}")))?;
            (archive, None)
        };

        // Deliver the archive
        let archive_path = out_dir.join(&archive.filename);
        write_archive(&archive, &archive_path)?;

        println!("✓ Generated {}", archive.filename);
        println!("  Output: {}", archive_path.display());
        if let Some(scratch) = scratch {
            println!("  Workspace: {}", scratch.display());
        }

        Ok(())
    }
}

fn write_archive(archive: &GeneratedArchive, path: &Path) -> CliResult<()> {
    fs::write(path, &archive.bytes)
        .map_err(|e| CliError::io(format!("Failed to write archive {}: {e}", path.display())))
}
