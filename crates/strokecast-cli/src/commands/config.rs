// Configuration management

use strokecast_config::{AppConfig, ConfigManager, ConfigManagerTrait};

use super::Command;
use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;
use crate::settings::Settings;

/// Manage configuration
pub struct ConfigCommand {
    pub action: ConfigAction,
    settings: Settings,
}

#[derive(Debug, Clone)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file
    Init { force: bool },
}

impl ConfigCommand {
    pub fn new(action: ConfigAction, settings: Settings) -> Self {
        Self { action, settings }
    }

    /// Effective configuration as TOML
    pub fn show(&self) -> CliResult<String> {
        toml::to_string_pretty(&self.settings.config)
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Write the default configuration unless a file exists and `force` is off
    pub fn init(&self, force: bool) -> CliResult<String> {
        let path = &self.settings.config_path;
        if path.exists() && !force {
            return Err(CliError::InvalidArgument {
                message: format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ),
            });
        }

        ConfigManager::with_path(path.clone()).save_config(&AppConfig::default())?;
        Ok(format!("Wrote default configuration to {}", path.display()))
    }
}

#[async_trait::async_trait]
impl Command for ConfigCommand {
    async fn execute(&self) -> CliResult<()> {
        let style = OutputStyle::new(self.settings.config.output.colors);
        match &self.action {
            ConfigAction::Show => {
                println!("{}", style.header("Strokecast Configuration"));
                println!();
                print!("{}", self.show()?);
                println!();
                println!(
                    "{}",
                    style.info(&format!("Config file: {}", self.settings.config_path.display()))
                );
            }
            ConfigAction::Path => println!("{}", self.settings.config_path.display()),
            ConfigAction::Init { force } => println!("{}", style.success(&self.init(*force)?)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_in(dir: &tempfile::TempDir) -> Settings {
        Settings {
            config: AppConfig::default(),
            config_path: dir.path().join("strokecast").join("config.toml"),
        }
    }

    #[test]
    fn test_show_contains_service_section() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = ConfigCommand::new(ConfigAction::Show, settings_in(&dir));
        let shown = cmd.show().unwrap();
        assert!(shown.contains("[service]"));
        assert!(shown.contains("base_url = \"http://127.0.0.1:8000\""));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = ConfigCommand::new(ConfigAction::Init { force: false }, settings_in(&dir));

        assert!(cmd.init(false).is_ok());
        assert!(cmd.settings.config_path.exists());
        assert!(matches!(cmd.init(false), Err(CliError::InvalidArgument { .. })));
        assert!(cmd.init(true).is_ok());
    }
}
