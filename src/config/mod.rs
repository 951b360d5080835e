pub mod cli;
pub mod yaml_config;

#[cfg(feature = "cli")]
use crate::core::BuildSettings;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-gen")]
#[command(about = "Generate a portfolio page from a YAML config")]
#[command(version)]
pub struct CliConfig {
    /// Path to the portfolio YAML config
    #[arg(short, long, default_value = "portfolio-config.yaml")]
    pub config: String,

    /// Directory the page is written into
    #[arg(long, default_value = ".")]
    pub output_dir: String,

    /// File name of the generated page
    #[arg(long, default_value = "index.html")]
    pub output_file: String,

    /// Build the page and print a summary without writing it
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl BuildSettings for CliConfig {
    fn config_path(&self) -> &str {
        &self.config
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("config", &self.config)?;
        validate_path("output_dir", &self.output_dir)?;
        validate_path("output_file", &self.output_file)?;
        Ok(())
    }
}
