// Command handlers for the stroke CLI

pub mod config;
pub mod fields;
pub mod predict;
pub mod probe;

pub use config::{ConfigAction, ConfigCommand};
pub use fields::{FieldsCommand, VariantsCommand};
pub use predict::PredictCommand;
pub use probe::ProbeCommand;

use strokecast_forms::FormSchema;
use strokecast_predict::PredictionSession;

use crate::error::CliResult;

/// Trait for command handlers
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn execute(&self) -> CliResult<()>;
}

/// Apply `NAME=VALUE` edits in order; any unknown field aborts before submit
pub(crate) fn apply_assignments(
    schema: &FormSchema,
    session: &mut PredictionSession,
    assignments: &[String],
) -> CliResult<()> {
    for assignment in assignments {
        let (name, value) = schema.parse_assignment(assignment)?;
        session.set_field(name, value);
    }
    Ok(())
}
