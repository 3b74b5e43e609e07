//! Core configuration types and data structures

use std::{fmt, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};
use strokecast_forms::FormVariant;
use strokecast_http::HttpConfig;

use crate::error::Result;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Prediction service location
    pub service: ServiceConfig,
    /// Form selection
    pub form: FormConfig,
    /// Result rendering
    pub output: OutputConfig,
}

/// Prediction service configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the service
    pub base_url: String,
    /// Path of the prediction endpoint
    pub endpoint_path: String,
    /// Request timeout in seconds (unset = wait indefinitely)
    pub timeout_secs: Option<u64>,
    /// HTTP/HTTPS proxy URL
    pub proxy: Option<String>,
    /// User agent override
    pub user_agent: Option<String>,
}

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct FormConfig {
    /// Which field set to present
    pub variant: FormVariant,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// How replies are rendered
    pub format: OutputFormat,
    /// Use ANSI colors when stdout is a terminal
    pub colors: bool,
}

/// Reply rendering mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Pretty-printed JSON block per model
    #[default]
    Raw,
    /// Table of probability, threshold and interpretation
    Summary,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Raw => f.write_str("raw"),
            OutputFormat::Summary => f.write_str("summary"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "raw" => Ok(OutputFormat::Raw),
            "summary" => Ok(OutputFormat::Summary),
            other => Err(format!("unknown output format '{other}' (expected raw or summary)")),
        }
    }
}

/// Configuration manager trait
pub trait ConfigManager {
    /// Load configuration from all sources
    fn load_config(&mut self) -> Result<AppConfig>;
    /// Persist configuration to the config file
    fn save_config(&self, config: &AppConfig) -> Result<()>;
    /// Check a configuration for invalid values
    fn validate_config(&self, config: &AppConfig) -> Result<()>;
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            endpoint_path: "/predict-stroke/".to_string(),
            timeout_secs: None,
            proxy: None,
            user_agent: None,
        }
    }
}

impl ServiceConfig {
    /// HTTP client settings derived from this section
    pub fn http_config(&self) -> HttpConfig {
        let mut http = HttpConfig::default();
        if let Some(secs) = self.timeout_secs {
            http = http.with_timeout(Duration::from_secs(secs));
        }
        if let Some(proxy) = &self.proxy {
            http = http.with_proxy(proxy.clone());
        }
        if let Some(agent) = &self.user_agent {
            http = http.with_user_agent(agent.clone());
        }
        http
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Raw,
            colors: true,
        }
    }
}
