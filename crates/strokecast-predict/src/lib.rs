//! Multi-model prediction requests
//!
//! Fans one form submission out to every model the service hosts and folds the replies
//! back into a single all-or-nothing result.

pub mod error;
pub mod model;
pub mod requester;
pub mod session;
pub mod summary;

pub use error::{PredictError, Result};
pub use model::ModelName;
pub use requester::{endpoint_url, ModelOutcome, MultiModelRequester, PredictionResults};
pub use session::{ErrorState, PredictionSession, SubmissionPhase, FALLBACK_ERROR_MESSAGE};
pub use summary::{PredictionSummary, ResponseView};
