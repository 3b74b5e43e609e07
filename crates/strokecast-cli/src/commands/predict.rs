// Submit the form to every model

use strokecast_config::OutputFormat;
use strokecast_forms::FormVariant;
use strokecast_predict::{PredictionSession, SubmissionPhase, FALLBACK_ERROR_MESSAGE};
use tracing::info;

use super::{apply_assignments, Command};
use crate::error::{CliError, CliResult};
use crate::settings::Settings;
use crate::{output, progress, prompt};

/// Fill the form and ask every model for a prediction
pub struct PredictCommand {
    settings: Settings,
    variant: Option<FormVariant>,
    assignments: Vec<String>,
    interactive: bool,
    format: Option<OutputFormat>,
}

impl PredictCommand {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            variant: None,
            assignments: Vec::new(),
            interactive: false,
            format: None,
        }
    }

    pub fn with_variant(mut self, variant: Option<FormVariant>) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_assignments(mut self, assignments: Vec<String>) -> Self {
        self.assignments = assignments;
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        self.format = format;
        self
    }

    /// Build the session, apply edits and submit; returns the rendered results panel
    pub async fn run(&self) -> CliResult<String> {
        let variant = self.variant.unwrap_or(self.settings.config.form.variant);
        let schema = variant.schema();
        let mut session = PredictionSession::new(schema, self.settings.requester()?);

        apply_assignments(schema, &mut session, &self.assignments)?;
        if self.interactive {
            prompt::fill_interactively(&mut session)?;
        }

        info!(variant = %variant, "Requesting predictions");
        let spinner = progress::loading_indicator("Predicting...");
        let phase = session.submit().await;
        spinner.finish_and_clear();

        match phase {
            SubmissionPhase::Succeeded => {
                let format = self.format.unwrap_or(self.settings.config.output.format);
                Ok(output::render_results(&self.settings.style(), session.results(), format))
            }
            _ => Err(CliError::Prediction(
                session
                    .error()
                    .map(|e| e.message.clone())
                    .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
            )),
        }
    }
}

#[async_trait::async_trait]
impl Command for PredictCommand {
    async fn execute(&self) -> CliResult<()> {
        let rendered = self.run().await?;
        println!("{}", rendered);
        Ok(())
    }
}
