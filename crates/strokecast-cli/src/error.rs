// CLI error types

use strokecast_config::ConfigError;
use strokecast_forms::FormError;
use strokecast_http::HttpError;
use strokecast_predict::PredictError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("{0}")]
    Prediction(String),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Input error: {0}")]
    Prompt(String),

    #[error("Cancelled")]
    Cancelled,
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!(
                    "Invalid argument: {}\n\nRun 'stroke --help' for usage information.",
                    message
                )
            }
            CliError::Config(msg) => {
                format!(
                    "Configuration error: {}\n\nRun 'stroke config show' to inspect it.",
                    msg
                )
            }
            CliError::Form(e) => {
                format!("{}\n\nRun 'stroke fields' to list the fields of each form.", e)
            }
            CliError::Prediction(msg) => format!("Error: {}", msg),
            CliError::Http(msg) => format!("HTTP client error: {}", msg),
            CliError::Prompt(msg) => format!("Input error: {}", msg),
            CliError::Cancelled => "Cancelled".to_string(),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<HttpError> for CliError {
    fn from(err: HttpError) -> Self {
        CliError::Http(err.to_string())
    }
}

impl From<PredictError> for CliError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::InvalidEndpoint { .. } => CliError::Config(err.to_string()),
            other => CliError::Prediction(other.to_string()),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
