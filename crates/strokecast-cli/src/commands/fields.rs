// Describe the available forms

use strokecast_forms::FormVariant;

use super::Command;
use crate::error::CliResult;
use crate::output::{self, OutputStyle};

/// List the fields of one form with their defaults and choices
pub struct FieldsCommand {
    variant: FormVariant,
    style: OutputStyle,
}

impl FieldsCommand {
    pub fn new(variant: FormVariant, style: OutputStyle) -> Self {
        Self { variant, style }
    }

    pub fn render(&self) -> String {
        let schema = self.variant.schema();
        output::render_fields(&self.style, schema, &schema.initial_state())
    }
}

#[async_trait::async_trait]
impl Command for FieldsCommand {
    async fn execute(&self) -> CliResult<()> {
        println!("{}", self.render());
        Ok(())
    }
}

/// List form variants
pub struct VariantsCommand {
    style: OutputStyle,
}

impl VariantsCommand {
    pub fn new(style: OutputStyle) -> Self {
        Self { style }
    }

    pub fn render(&self) -> String {
        FormVariant::ALL
            .iter()
            .map(|v| {
                let schema = v.schema();
                self.style.key_value(
                    schema.id,
                    &format!("{} ({} fields)", schema.title, schema.fields.len()),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[async_trait::async_trait]
impl Command for VariantsCommand {
    async fn execute(&self) -> CliResult<()> {
        println!("{}", self.render());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_listing() {
        let rendered = VariantsCommand::new(OutputStyle { use_colors: false }).render();
        assert_eq!(
            rendered,
            "  demographic: Stroke Prediction (8 fields)\n\
             \x20 vitals: Prediksi Risiko Stroke (12 fields)"
        );
    }

    #[test]
    fn test_fields_listing_for_vitals() {
        let style = OutputStyle { use_colors: false };
        let rendered = FieldsCommand::new(FormVariant::Vitals, style).render();
        assert!(rendered
            .contains("suhu_tubuh: Suhu Tubuh (°C) [number, step 0.1, sent as float] = 36.5"));
        assert!(rendered.contains("tekanan_diastolik"));
    }
}
