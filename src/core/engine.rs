use crate::core::{DocumentSummary, Pipeline};
use crate::utils::error::Result;

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub output_path: String,
    pub bytes: usize,
    pub summary: DocumentSummary,
}

/// Runs a pipeline stage by stage. Any failure stops the run before the
/// next stage starts, so nothing is written unless rendering succeeded.
pub struct SiteBuilder<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SiteBuilder<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<BuildReport> {
        tracing::info!("Loading config...");
        let config = self.pipeline.read_config()?;

        tracing::info!("Rendering page...");
        let document = self.pipeline.render(&config)?;
        tracing::info!(
            "Rendered {} list items, {} projects, {} experience and {} education panels",
            document.summary.list_items,
            document.summary.projects,
            document.summary.experience,
            document.summary.education
        );

        tracing::info!("Writing page...");
        let output_path = self.pipeline.write(&document)?;

        Ok(BuildReport {
            output_path,
            bytes: document.html.len(),
            summary: document.summary,
        })
    }
}
