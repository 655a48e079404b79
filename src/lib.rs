pub mod changelog;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod forge;
pub mod orchestrator;
pub mod resolver;

pub use cli::Args;
pub use config::CompositeConfig;
pub use error::{CompositeError, Result};
pub use orchestrator::Orchestrator;

#[cfg(test)]
pub mod test_helpers;
