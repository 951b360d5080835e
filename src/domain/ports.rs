use crate::domain::model::{PortfolioConfig, RenderedDocument};
use crate::utils::error::Result;

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// Where the build reads from and writes to.
pub trait BuildSettings {
    fn config_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn dry_run(&self) -> bool;
}

pub trait Pipeline {
    fn read_config(&self) -> Result<PortfolioConfig>;
    fn render(&self, config: &PortfolioConfig) -> Result<RenderedDocument>;
    fn write(&self, document: &RenderedDocument) -> Result<String>;
}
