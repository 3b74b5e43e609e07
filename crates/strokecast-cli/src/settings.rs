// Effective settings: config file + environment + command-line overrides

use std::path::{Path, PathBuf};

use strokecast_config::{AppConfig, ConfigManager, ConfigManagerTrait};
use strokecast_http::shared_client;
use strokecast_predict::MultiModelRequester;
use tracing::debug;

use crate::error::CliResult;
use crate::output::OutputStyle;

/// Resolved configuration for one invocation
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: AppConfig,
    pub config_path: PathBuf,
}

impl Settings {
    /// Load configuration, then apply `--base-url`
    pub fn load(config_path: Option<&Path>, base_url: Option<&str>) -> CliResult<Self> {
        let mut manager = match config_path {
            Some(path) => ConfigManager::with_path(path.to_path_buf()),
            None => ConfigManager::new(),
        };
        let mut config = manager.load_config()?;

        if let Some(url) = base_url {
            config.service.base_url = url.to_string();
            manager.validate_config(&config)?;
        }
        debug!("Using prediction service at {}", config.service.base_url);

        Ok(Self {
            config,
            config_path: manager.config_path().to_path_buf(),
        })
    }

    /// Requester bound to the configured endpoint
    pub fn requester(&self) -> CliResult<MultiModelRequester> {
        let client = shared_client(self.config.service.http_config())?;
        Ok(MultiModelRequester::from_base_url(
            client,
            &self.config.service.base_url,
            &self.config.service.endpoint_path,
        )?)
    }

    pub fn style(&self) -> OutputStyle {
        OutputStyle::new(self.config.output.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let settings = Settings::load(Some(&path), Some("http://10.1.2.3:8000/")).unwrap();

        assert_eq!(settings.config.service.base_url, "http://10.1.2.3:8000/");
        assert_eq!(settings.config_path, path);
        assert_eq!(
            settings.requester().unwrap().endpoint(),
            "http://10.1.2.3:8000/predict-stroke/"
        );
    }

    #[test]
    fn test_invalid_base_url_override() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::load(Some(&dir.path().join("config.toml")), Some("localhost:8000"));
        assert!(result.is_err());
    }
}
