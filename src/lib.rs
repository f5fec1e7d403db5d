pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalStorage, ProcessEnvironment};
pub use config::{ChangelogConfig, ToolsConfig, VenvConfig};
pub use crate::core::{changelog::ChangelogStamper, docs::DocsConfig, venv::is_virtual_env};
pub use utils::error::{Result, ToolError};
