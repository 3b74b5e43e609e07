//! Typed reading of the service's reply
//!
//! The service answers with `{model, probabilitas_stroke, ambang_batas, interpretasi_risiko}`,
//! percentages formatted as `"12.34%"`. An unknown `model_name` yields a 200 reply of the
//! form `{"error": "..."}`. Anything else is shown raw.

use serde::{Deserialize, Serialize};

/// A recognised prediction reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSummary {
    pub model: String,
    pub probabilitas_stroke: String,
    pub ambang_batas: String,
    pub interpretasi_risiko: String,
}

impl PredictionSummary {
    /// Stroke probability in percent
    pub fn probability(&self) -> Option<f64> {
        parse_percent(&self.probabilitas_stroke)
    }

    /// Decision threshold in percent
    pub fn threshold(&self) -> Option<f64> {
        parse_percent(&self.ambang_batas)
    }

    /// Probability at or above threshold
    pub fn is_high_risk(&self) -> Option<bool> {
        Some(self.probability()? >= self.threshold()?)
    }
}

#[derive(Deserialize)]
struct ServiceErrorBody {
    error: String,
}

/// How a raw reply should be presented
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseView {
    Summary(PredictionSummary),
    ServiceError(String),
    Raw(String),
}

impl ResponseView {
    /// Classify a reply's text
    pub fn interpret(raw: &str) -> Self {
        if let Ok(summary) = serde_json::from_str::<PredictionSummary>(raw) {
            return ResponseView::Summary(summary);
        }
        if let Ok(body) = serde_json::from_str::<ServiceErrorBody>(raw) {
            return ResponseView::ServiceError(body.error);
        }
        ResponseView::Raw(raw.to_string())
    }
}

fn parse_percent(text: &str) -> Option<f64> {
    text.trim().trim_end_matches('%').trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_interpret_summary() {
        let raw = serde_json::to_string_pretty(&json!({
            "model": "xgboost",
            "probabilitas_stroke": "41.07%",
            "ambang_batas": "28.80%",
            "interpretasi_risiko": "Potensi risiko stroke tinggi"
        }))
        .unwrap();

        match ResponseView::interpret(&raw) {
            ResponseView::Summary(summary) => {
                assert_eq!(summary.model, "xgboost");
                assert_eq!(summary.probability(), Some(41.07));
                assert_eq!(summary.threshold(), Some(28.8));
                assert_eq!(summary.is_high_risk(), Some(true));
            }
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn test_interpret_service_error() {
        let raw = r#"{"error": "Invalid model."}"#;
        assert_eq!(
            ResponseView::interpret(raw),
            ResponseView::ServiceError("Invalid model.".to_string())
        );
    }

    #[test]
    fn test_interpret_other_shapes_as_raw() {
        let raw = r#"{"prediction": 0.3}"#;
        assert_eq!(ResponseView::interpret(raw), ResponseView::Raw(raw.to_string()));
    }

    #[test]
    fn test_low_risk_and_unparseable_percent() {
        let mut summary = PredictionSummary {
            model: "random_forest".to_string(),
            probabilitas_stroke: "12.00%".to_string(),
            ambang_batas: "36.20%".to_string(),
            interpretasi_risiko: "rendah".to_string(),
        };
        assert_eq!(summary.is_high_risk(), Some(false));

        summary.ambang_batas = "n/a".to_string();
        assert_eq!(summary.is_high_risk(), None);
    }
}
