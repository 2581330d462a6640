//! `sitegen clean` command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use sitegen_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the clean command.
#[derive(Args)]
pub(crate) struct CleanArgs {
    /// Output directory to remove (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover sitegen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CleanArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output_dir: self.output_dir.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let output_dir = &config.build_resolved.output_dir;
        if !output_dir.exists() {
            output.warning(&format!("Nothing to clean: {}", output_dir.display()));
            return Ok(());
        }

        fs::remove_dir_all(output_dir)?;
        output.success(&format!("Removed {}", output_dir.display()));
        Ok(())
    }
}
