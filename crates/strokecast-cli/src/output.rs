// Output formatting and styling

use colored::Colorize;
use strokecast_config::OutputFormat;
use strokecast_forms::{FieldKind, FormSchema, FormState, SubmitAs};
use strokecast_predict::{ModelOutcome, PredictError, PredictionResults, ResponseView};

/// Heading printed above the per-model JSON blocks
pub const RESULTS_HEADING: &str = "Raw JSON Res:";

/// Output styling configuration
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    /// Colors only when enabled and stdout is a terminal
    pub fn new(colors_enabled: bool) -> Self {
        Self {
            use_colors: colors_enabled && atty::is(atty::Stream::Stdout),
        }
    }

    /// Format success message
    pub fn success(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✓".green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    /// Format error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    /// Format warning message
    pub fn warning(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "⚠".yellow(), msg)
        } else {
            format!("⚠ {}", msg)
        }
    }

    /// Format info message
    pub fn info(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "ℹ".blue(), msg)
        } else {
            format!("ℹ {}", msg)
        }
    }

    /// Format a pre-formatted JSON block
    pub fn code(&self, code: &str) -> String {
        if self.use_colors {
            code.cyan().to_string()
        } else {
            code.to_string()
        }
    }

    /// Format header
    pub fn header(&self, title: &str) -> String {
        if self.use_colors {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }

    /// Format a section header
    pub fn section(&self, title: &str) -> String {
        let rule = "─".repeat(title.chars().count());
        if self.use_colors {
            format!("\n{}\n{}", title.bold().underline(), rule)
        } else {
            format!("\n{}\n{}", title, rule)
        }
    }

    /// Format a key-value pair
    pub fn key_value(&self, key: &str, value: &str) -> String {
        if self.use_colors {
            format!("  {}: {}", key.bold(), value)
        } else {
            format!("  {}: {}", key, value)
        }
    }
}

/// Results panel: one block per model in fixed model order
pub fn render_results(
    style: &OutputStyle,
    results: &PredictionResults,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Raw => render_raw(style, results),
        OutputFormat::Summary => render_summary(style, results),
    }
}

fn render_raw(style: &OutputStyle, results: &PredictionResults) -> String {
    let mut out = style.header(RESULTS_HEADING);
    for (model, raw) in results.iter() {
        out.push_str(&format!("\n\n── {}\n{}", model, style.code(raw)));
    }
    out
}

fn render_summary(style: &OutputStyle, results: &PredictionResults) -> String {
    let mut lines = vec![style.header(&format!(
        "{:<20} {:>12} {:>12}  {}",
        "model", "probability", "threshold", "interpretation"
    ))];

    for (model, raw) in results.iter() {
        let line = match ResponseView::interpret(raw) {
            ResponseView::Summary(summary) => {
                let row = format!(
                    "{:<20} {:>12} {:>12}  {}",
                    model.as_str(),
                    summary.probabilitas_stroke,
                    summary.ambang_batas,
                    summary.interpretasi_risiko
                );
                match summary.is_high_risk() {
                    Some(true) => style.warning(&row),
                    Some(false) => style.success(&row),
                    None => row,
                }
            }
            ResponseView::ServiceError(message) => {
                style.error(&format!("{}: service rejected the request: {}", model, message))
            }
            ResponseView::Raw(text) => format!("── {}\n{}", model, style.code(&text)),
        };
        lines.push(line);
    }
    lines.join("\n")
}

/// One line per model from a settle-all probe
pub fn render_probe(style: &OutputStyle, outcomes: &[ModelOutcome]) -> String {
    outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(raw) => {
                let compact = serde_json::from_str::<serde_json::Value>(raw)
                    .map(|v| v.to_string())
                    .unwrap_or_else(|_| raw.clone());
                style.success(&format!("OK {}: {}", outcome.model, compact))
            }
            Err(PredictError::Status { status, body, .. }) => {
                style.error(&format!("Err {}: {} - {}", outcome.model, status, body))
            }
            Err(e) => style.error(&format!("Err {}: {}", outcome.model, e)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Field listing for a form, showing the values in `state`
pub fn render_fields(style: &OutputStyle, schema: &FormSchema, state: &FormState) -> String {
    let mut out = style.section(&format!("{} ({})", schema.title, schema.id));

    for field in schema.fields {
        let kind = match (field.kind, field.submit_as) {
            (FieldKind::Select { .. }, _) => "select".to_string(),
            (FieldKind::Number { step }, SubmitAs::Float) => {
                format!("number, step {step}, sent as float")
            }
            (FieldKind::Number { step }, SubmitAs::Text) => format!("number, step {step}"),
        };
        let value = state.get(field.name).unwrap_or("");
        out.push('\n');
        out.push_str(&style.key_value(
            field.name,
            &format!("{} [{}] = {}", field.label, kind, field.display_value(value)),
        ));

        if let FieldKind::Select { options } = field.kind {
            for option in options {
                out.push_str(&format!("\n      {:>3}  {}", option.value, option.label));
            }
        }
    }
    out
}

/// Print an error to stderr
pub fn print_error(msg: &str) {
    let style = OutputStyle::default();
    eprintln!("{}", style.error(msg));
}
