//! Doctor command for environment checking.

use crate::cli::common::{CliError, CliResult};
use crate::doctor::{has_failures, DoctorFormatter, EnvironmentChecker, OutputFormat};
use clap::Args;
use std::path::PathBuf;

/// Check that the template environment is ready for generation
#[derive(Debug, Clone, Args)]
pub struct DoctorArgs {
    /// Template root directory (overrides app config)
    #[arg(long, value_name = "DIR")]
    pub template_root: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl DoctorArgs {
    /// Execute the doctor command
    pub fn execute(&self) -> CliResult<()> {
        // Run all environment checks
        let checker = EnvironmentChecker::new();
        let results = checker.check_all(self.template_root.as_deref());

        // Determine output format
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Terminal
        };

        // Format and print results
        let formatter = DoctorFormatter::with_format(format);
        let output = formatter.format_results(&results);
        println!("{output}");

        // Determine exit code
        if has_failures(&results) {
            Err(CliError::validation("Required environment checks failed"))
        } else {
            Ok(())
        }
    }
}
