// Interactive field entry

use rustyline::{error::ReadlineError, DefaultEditor};
use strokecast_forms::{FieldKind, FieldSpec};
use strokecast_predict::PredictionSession;

use crate::error::{CliError, CliResult};

/// Prompt text for one field, listing its choices when it has any
pub fn field_prompt(field: &FieldSpec) -> String {
    match field.kind {
        FieldKind::Select { options } => {
            let choices: Vec<String> = options
                .iter()
                .map(|o| format!("{}={}", o.value, o.label))
                .collect();
            format!("{} ({}): ", field.label, choices.join(", "))
        }
        FieldKind::Number { .. } => format!("{}: ", field.label),
    }
}

/// Walk every field of the session's form, pre-filled with its current value.
///
/// Ctrl-D keeps the remaining values, Ctrl-C cancels.
pub fn fill_interactively(session: &mut PredictionSession) -> CliResult<()> {
    let mut editor = DefaultEditor::new().map_err(|e| CliError::Prompt(e.to_string()))?;

    for field in session.schema().fields {
        let current = session.form().get(field.name).unwrap_or(field.default).to_string();
        match editor.readline_with_initial(&field_prompt(field), (current.as_str(), "")) {
            Ok(line) => {
                session.set_field(field.name, line.trim());
            }
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => return Err(CliError::Cancelled),
            Err(e) => return Err(CliError::Prompt(e.to_string())),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strokecast_forms::variants::{DEMOGRAPHIC, VITALS};

    #[test]
    fn test_select_prompt_lists_choices() {
        let field = DEMOGRAPHIC.field("gender").unwrap();
        assert_eq!(field_prompt(field), "Gender (1=Male, 0=Female, -1=Other): ");
    }

    #[test]
    fn test_number_prompt() {
        let field = VITALS.field("suhu_tubuh").unwrap();
        assert_eq!(field_prompt(field), "Suhu Tubuh (°C): ");
    }
}
