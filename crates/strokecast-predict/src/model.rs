//! Model identifiers understood by the prediction service

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One of the three models the service hosts. The set is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelName {
    LogisticRegression,
    Xgboost,
    RandomForest,
}

impl ModelName {
    /// Every model, in display order
    pub const ALL: [ModelName; 3] = [
        ModelName::LogisticRegression,
        ModelName::Xgboost,
        ModelName::RandomForest,
    ];

    /// Wire identifier sent as `model_name`
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelName::LogisticRegression => "logistic_regression",
            ModelName::Xgboost => "xgboost",
            ModelName::RandomForest => "random_forest",
        }
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelName::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown model '{s}'"))
    }
}
