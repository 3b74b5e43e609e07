//! Prediction error types

use strokecast_http::HttpError;
use thiserror::Error;

use crate::model::ModelName;

/// Prediction result type
pub type Result<T> = std::result::Result<T, PredictError>;

/// Prediction errors
#[derive(Debug, Error)]
pub enum PredictError {
    /// The service answered with a non-2xx status
    #[error("Error for {model}: {status}")]
    Status {
        model: ModelName,
        status: u16,
        body: String,
    },

    /// No usable response (connection refused, DNS failure, timeout)
    #[error("Request for {model} failed: {source}")]
    Transport {
        model: ModelName,
        #[source]
        source: HttpError,
    },

    /// A 2xx reply whose body is not JSON
    #[error("Invalid JSON from {model}: {source}")]
    InvalidBody {
        model: ModelName,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

impl PredictError {
    /// Model whose request produced this error
    pub fn model(&self) -> Option<ModelName> {
        match self {
            PredictError::Status { model, .. }
            | PredictError::Transport { model, .. }
            | PredictError::InvalidBody { model, .. } => Some(*model),
            PredictError::InvalidEndpoint { .. } => None,
        }
    }

    pub(crate) fn from_http(model: ModelName, err: HttpError) -> Self {
        match err {
            HttpError::HttpStatus { status, message } => PredictError::Status {
                model,
                status: status.as_u16(),
                body: message,
            },
            other => PredictError::Transport {
                model,
                source: other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_names_model_and_code() {
        let err = PredictError::Status {
            model: ModelName::Xgboost,
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Error for xgboost: 500");
        assert_eq!(err.model(), Some(ModelName::Xgboost));
    }

    #[test]
    fn test_from_http_maps_status() {
        let err = PredictError::from_http(
            ModelName::RandomForest,
            HttpError::HttpStatus {
                status: strokecast_http::StatusCode::NOT_FOUND,
                message: "Not Found".to_string(),
            },
        );
        assert!(matches!(err, PredictError::Status { status: 404, .. }));
    }

    #[test]
    fn test_from_http_maps_transport() {
        let err = PredictError::from_http(
            ModelName::LogisticRegression,
            HttpError::InvalidUrl("relative URL without a base".to_string()),
        );
        assert!(matches!(err, PredictError::Transport { .. }));
        assert!(err.to_string().starts_with("Request for logistic_regression failed"));
    }
}
