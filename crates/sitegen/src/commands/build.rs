//! `sitegen build` command implementation.

use std::path::PathBuf;

use clap::Args;
use sitegen_config::{CliSettings, Config};
use sitegen_site::{BuildConfig, SiteBuilder};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Markdown content directory (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Static asset directory (overrides config).
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// HTML template path (overrides config).
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Base path the site is served under, e.g. "/docs/" (overrides config).
    #[arg(short, long)]
    base_path: Option<String>,

    /// Path to configuration file (default: auto-discover sitegen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_dir: self.content_dir.clone(),
            static_dir: self.static_dir.clone(),
            template: self.template.clone(),
            output_dir: self.output_dir.clone(),
            base_path: self.base_path.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Content: {}",
            config.build_resolved.content_dir.display()
        ));
        output.info(&format!(
            "Output: {}",
            config.build_resolved.output_dir.display()
        ));

        let builder = SiteBuilder::new(BuildConfig {
            content_dir: config.build_resolved.content_dir.clone(),
            static_dir: config.build_resolved.static_dir.clone(),
            template_path: config.build_resolved.template.clone(),
            output_dir: config.build_resolved.output_dir.clone(),
            base_path: config.site.base_path.clone(),
        });
        let summary = builder.build()?;

        output.success(&format!(
            "Site built successfully: {} pages, {} assets in {}",
            summary.pages,
            summary.assets,
            config.build_resolved.output_dir.display()
        ));
        Ok(())
    }
}
