//! HTTP client configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HttpConfig {
    /// Request timeout (None = wait for the server indefinitely)
    #[serde(default)]
    pub timeout: Option<Duration>,

    /// Connection timeout
    #[serde(default)]
    pub connect_timeout: Option<Duration>,

    /// HTTP/HTTPS proxy URL
    #[serde(default)]
    pub proxy: Option<String>,

    /// Custom user agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum redirects to follow (0 = no redirects)
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Enable connection pooling
    #[serde(default = "default_pool_enabled")]
    pub pool_enabled: bool,

    /// Pool idle timeout
    #[serde(default = "default_pool_idle_timeout")]
    pub pool_idle_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: None,
            proxy: None,
            user_agent: default_user_agent(),
            max_redirects: default_max_redirects(),
            pool_enabled: default_pool_enabled(),
            pool_idle_timeout: default_pool_idle_timeout(),
        }
    }
}

impl HttpConfig {
    /// Create a new HTTP config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set proxy URL
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

// Default value functions for serde
fn default_user_agent() -> String {
    format!("Strokecast/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_redirects() -> usize {
    10
}

fn default_pool_enabled() -> bool {
    true
}

fn default_pool_idle_timeout() -> Duration {
    Duration::from_secs(90)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_timeout() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout, None);
        assert_eq!(config.connect_timeout, None);
        assert!(config.pool_enabled);
        assert!(config.user_agent.starts_with("Strokecast/"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = HttpConfig::new()
            .with_timeout(Duration::from_secs(15))
            .with_user_agent("probe/1.0")
            .with_proxy("http://proxy.example.com:8080");

        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.user_agent, "probe/1.0");
        assert_eq!(config.proxy, Some("http://proxy.example.com:8080".to_string()));
    }
}
