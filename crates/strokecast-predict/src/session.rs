//! Form session: current values, last outcome and submission phase

use serde::Serialize;
use strokecast_forms::{FormSchema, FormState};
use tokio::sync::watch;
use tracing::info;

use crate::requester::{MultiModelRequester, PredictionResults};

/// Shown when a failure carries no message of its own
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to get predictions";

/// Where a session is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionPhase::Loading)
    }
}

/// The single user-visible failure message of a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorState {
    pub message: String,
}

impl ErrorState {
    /// Collapse any error into its message, or the fallback text when it has none
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        let message = err.to_string();
        if message.trim().is_empty() {
            Self {
                message: FALLBACK_ERROR_MESSAGE.to_string(),
            }
        } else {
            Self { message }
        }
    }
}

/// One form instance bound to a requester.
///
/// Holds the field values between edits and the outcome of the latest submit. Phase
/// changes are broadcast to [`PredictionSession::subscribe`] receivers.
pub struct PredictionSession {
    schema: &'static FormSchema,
    state: FormState,
    requester: MultiModelRequester,
    results: PredictionResults,
    error: Option<ErrorState>,
    phase: watch::Sender<SubmissionPhase>,
}

impl PredictionSession {
    /// Start a session from the schema's default values
    pub fn new(schema: &'static FormSchema, requester: MultiModelRequester) -> Self {
        let (phase, _) = watch::channel(SubmissionPhase::Idle);
        Self {
            schema,
            state: schema.initial_state(),
            requester,
            results: PredictionResults::new(),
            error: None,
            phase,
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    pub fn form(&self) -> &FormState {
        &self.state
    }

    /// Replace one field's value; see [`FormState::set_field`]
    pub fn set_field(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.state.set_field(name, value)
    }

    pub fn results(&self) -> &PredictionResults {
        &self.results
    }

    pub fn error(&self) -> Option<&ErrorState> {
        self.error.as_ref()
    }

    pub fn phase(&self) -> SubmissionPhase {
        *self.phase.borrow()
    }

    pub fn is_loading(&self) -> bool {
        self.phase().is_loading()
    }

    /// Watch phase transitions
    pub fn subscribe(&self) -> watch::Receiver<SubmissionPhase> {
        self.phase.subscribe()
    }

    /// Submit the current values to every model.
    ///
    /// Clears the previous outcome, stays `Loading` until all requests settle, then stores
    /// either all results or one error message.
    pub async fn submit(&mut self) -> SubmissionPhase {
        self.results.clear();
        self.error = None;
        self.phase.send_replace(SubmissionPhase::Loading);
        info!(
            form = self.schema.id,
            endpoint = self.requester.endpoint(),
            "Submitting prediction form"
        );

        let outcome = self.requester.request_all(self.schema, &self.state).await;

        let settled = match outcome {
            Ok(results) => {
                self.results = results;
                SubmissionPhase::Succeeded
            }
            Err(e) => {
                self.error = Some(ErrorState::from_error(&e));
                SubmissionPhase::Failed
            }
        };
        self.phase.send_replace(settled);
        settled
    }
}
