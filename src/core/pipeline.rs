use crate::core::document::assemble;
use crate::core::{BuildSettings, Pipeline, PortfolioConfig, RenderedDocument, Storage};
use crate::utils::error::Result;

pub struct PortfolioPipeline<S: Storage, C: BuildSettings> {
    storage: S,
    settings: C,
}

impl<S: Storage, C: BuildSettings> PortfolioPipeline<S, C> {
    pub fn new(storage: S, settings: C) -> Self {
        Self { storage, settings }
    }
}

impl<S: Storage, C: BuildSettings> Pipeline for PortfolioPipeline<S, C> {
    fn read_config(&self) -> Result<PortfolioConfig> {
        tracing::debug!("Loading portfolio config from {}", self.settings.config_path());
        PortfolioConfig::from_file(self.settings.config_path())
    }

    fn render(&self, config: &PortfolioConfig) -> Result<RenderedDocument> {
        assemble(config)
    }

    fn write(&self, document: &RenderedDocument) -> Result<String> {
        let output_file = self.settings.output_file();

        if self.settings.dry_run() {
            tracing::info!("Dry run: skipping write of {}", output_file);
            return Ok(output_file.to_string());
        }

        tracing::debug!("Writing {} bytes to {}", document.html.len(), output_file);
        self.storage.write_file(output_file, document.html.as_bytes())?;
        Ok(output_file.to_string())
    }
}
