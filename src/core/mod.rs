pub mod accordion;
pub mod document;
pub mod embed;
pub mod engine;
pub mod list;
pub mod pipeline;

pub use crate::domain::model::{DocumentSummary, PortfolioConfig, RenderedDocument};
pub use crate::domain::ports::{BuildSettings, Pipeline, Storage};
pub use crate::utils::error::Result;
