//! Strokecast configuration
//!
//! Values come from built-in defaults, an optional TOML file, then `STROKECAST_*`
//! environment variables; the CLI applies its flags on top.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{
    AppConfig, ConfigManager as ConfigManagerTrait, FormConfig, OutputConfig, OutputFormat,
    ServiceConfig,
};
