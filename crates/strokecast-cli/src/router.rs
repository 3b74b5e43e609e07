// Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use strokecast_config::OutputFormat;
use strokecast_forms::FormVariant;

use crate::commands::*;
use crate::error::CliResult;
use crate::output::OutputStyle;
use crate::settings::Settings;

/// Strokecast - ask every stroke prediction model at once
#[derive(Parser, Debug)]
#[command(name = "stroke")]
#[command(bin_name = "stroke")]
#[command(about = "Submit patient attributes to every stroke prediction model")]
#[command(long_about = "Strokecast fills a stroke-risk form and sends it to the \
logistic_regression, xgboost and random_forest models of a prediction service concurrently.

Quick start:
  • stroke fields                 Show the form and its defaults
  • stroke predict --set age=67   Predict with one edited field
  • stroke predict -i             Fill the form interactively
  • stroke probe                  Check each model separately")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (default: <config dir>/strokecast/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prediction service base URL (overrides configuration)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Submit the form to every model
    #[command(about = "Submit the form to all three models and show their replies")]
    Predict {
        /// Form to use (demographic, vitals)
        #[arg(long)]
        variant: Option<FormVariant>,

        /// Set a field before submitting (repeatable)
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,

        /// Prompt for every field
        #[arg(short, long)]
        interactive: bool,

        /// Result rendering (raw, summary)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Query each model and report every outcome
    #[command(about = "Query each model separately and report every outcome")]
    Probe {
        /// Form to use (demographic, vitals)
        #[arg(long)]
        variant: Option<FormVariant>,

        /// Set a field before submitting (repeatable)
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
    },

    /// List the fields of a form
    #[command(about = "List the fields, defaults and choices of a form")]
    Fields {
        /// Form to describe (demographic, vitals; default: demographic)
        #[arg(long)]
        variant: Option<FormVariant>,
    },

    /// List available forms
    Variants,

    /// Manage configuration settings
    #[command(about = "View and initialize strokecast configuration")]
    Config {
        #[command(subcommand)]
        action: Option<ConfigSubcommand>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Show the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse arguments and dispatch
    pub async fn route() -> CliResult<()> {
        let cli = Cli::parse();

        // Initialize logging based on CLI flags
        crate::logging::init_logging(cli.verbose, cli.quiet);

        Self::execute(&cli).await
    }

    /// Execute a command.
    ///
    /// Only commands that talk to the service or manage configuration read it, so a broken
    /// config file never blocks `fields` or `variants`.
    pub async fn execute(cli: &Cli) -> CliResult<()> {
        let settings = || Settings::load(cli.config.as_deref(), cli.base_url.as_deref());

        match &cli.command {
            Commands::Predict {
                variant,
                set,
                interactive,
                format,
            } => {
                let cmd = PredictCommand::new(settings()?)
                    .with_variant(*variant)
                    .with_assignments(set.clone())
                    .with_interactive(*interactive)
                    .with_format(*format);
                cmd.execute().await
            }
            Commands::Probe { variant, set } => {
                ProbeCommand::new(settings()?, *variant, set.clone())
                    .execute()
                    .await
            }
            Commands::Fields { variant } => {
                FieldsCommand::new(variant.unwrap_or_default(), OutputStyle::default())
                    .execute()
                    .await
            }
            Commands::Variants => VariantsCommand::new(OutputStyle::default()).execute().await,
            Commands::Config { action } => {
                let action = match action {
                    Some(ConfigSubcommand::Show) | None => ConfigAction::Show,
                    Some(ConfigSubcommand::Path) => ConfigAction::Path,
                    Some(ConfigSubcommand::Init { force }) => ConfigAction::Init { force: *force },
                };
                ConfigCommand::new(action, settings()?).execute().await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_predict_with_edits() {
        let cli = Cli::try_parse_from([
            "stroke",
            "predict",
            "--variant",
            "vitals",
            "--set",
            "suhu_tubuh=38.1",
            "-s",
            "usia=64",
            "--format",
            "summary",
            "--base-url",
            "http://10.0.0.2:8000",
        ])
        .unwrap();

        assert_eq!(cli.base_url.as_deref(), Some("http://10.0.0.2:8000"));
        match cli.command {
            Commands::Predict {
                variant,
                set,
                interactive,
                format,
            } => {
                assert_eq!(variant, Some(FormVariant::Vitals));
                assert_eq!(set, vec!["suhu_tubuh=38.1", "usia=64"]);
                assert!(!interactive);
                assert_eq!(format, Some(OutputFormat::Summary));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        assert!(Cli::try_parse_from(["stroke", "fields", "--variant", "v9"]).is_err());
    }

    #[test]
    fn test_config_defaults_to_show() {
        let cli = Cli::try_parse_from(["stroke", "config"]).unwrap();
        assert!(matches!(cli.command, Commands::Config { action: None }));
    }

    #[tokio::test]
    async fn test_broken_config_only_blocks_commands_that_read_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[service\nbase_url = 1").unwrap();
        let path = path.to_str().unwrap();

        for listing in ["fields", "variants"] {
            let cli = Cli::try_parse_from(["stroke", "--config", path, listing]).unwrap();
            assert!(CommandRouter::execute(&cli).await.is_ok());
        }

        let cli = Cli::try_parse_from(["stroke", "--config", path, "config", "show"]).unwrap();
        assert!(matches!(
            CommandRouter::execute(&cli).await,
            Err(CliError::Config(_))
        ));
    }
}
