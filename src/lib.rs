pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::LocalStorage;
pub use crate::core::{engine::SiteBuilder, pipeline::PortfolioPipeline};
pub use domain::model::PortfolioConfig;
pub use utils::error::{PortfolioError, Result};
