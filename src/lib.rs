pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::github::GitHubGateway;
pub use crate::config::{Settings, SettingsOverrides};
pub use crate::core::commands::CommandRunner;
pub use crate::utils::error::{Result, TennisError};
