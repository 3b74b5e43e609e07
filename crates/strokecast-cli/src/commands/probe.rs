// Settle-all check of every model

use strokecast_forms::FormVariant;
use strokecast_predict::{ModelName, PredictionSession};

use super::{apply_assignments, Command};
use crate::error::{CliError, CliResult};
use crate::output;
use crate::settings::Settings;

/// Query every model and report each one separately.
///
/// Unlike `predict`, a failing model does not hide the others.
pub struct ProbeCommand {
    settings: Settings,
    variant: Option<FormVariant>,
    assignments: Vec<String>,
}

impl ProbeCommand {
    pub fn new(settings: Settings, variant: Option<FormVariant>, assignments: Vec<String>) -> Self {
        Self {
            settings,
            variant,
            assignments,
        }
    }

    /// Returns the report and how many models failed
    pub async fn run(&self) -> CliResult<(String, usize)> {
        let variant = self.variant.unwrap_or(self.settings.config.form.variant);
        let schema = variant.schema();
        let requester = self.settings.requester()?;
        let mut session = PredictionSession::new(schema, requester.clone());
        apply_assignments(schema, &mut session, &self.assignments)?;

        let outcomes = requester.request_each(schema, session.form()).await;
        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        Ok((output::render_probe(&self.settings.style(), &outcomes), failed))
    }
}

#[async_trait::async_trait]
impl Command for ProbeCommand {
    async fn execute(&self) -> CliResult<()> {
        let (report, failed) = self.run().await?;
        println!("{}", report);
        if failed > 0 {
            return Err(CliError::Prediction(format!(
                "{} of {} models failed",
                failed,
                ModelName::ALL.len()
            )));
        }
        Ok(())
    }
}
