use crate::domain::model::{CarouselItem, PortfolioConfig};
use crate::utils::error::{PortfolioError, Result};
use std::path::Path;

impl PortfolioConfig {
    /// Load the portfolio document from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();

        let content =
            std::fs::read_to_string(path).map_err(|source| PortfolioError::ConfigLoadError {
                path: origin.clone(),
                source,
            })?;

        tracing::debug!("Read {} bytes from {}", content.len(), origin);
        Self::parse(&content, &origin)
    }

    /// Parse the portfolio document from a YAML string.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::parse(content, "<inline>")
    }

    /// Values are taken as written; nothing in the text is expanded.
    fn parse(content: &str, origin: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).map_err(|e| PortfolioError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// The carousel, or an empty slice when the section is absent.
    pub fn carousel(&self) -> &[CarouselItem] {
        self.project_carousel.as_deref().unwrap_or(&[])
    }
}
