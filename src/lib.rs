pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use core::cleaner::CleanerEngine;
pub use utils::error::{CleanerError, Result};
