use serde::{Deserialize, Serialize};

use super::Language;

/// Direction of the skew, taken from the sign of the skewness parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkewCategory {
    Negative,
    Symmetric,
    Positive,
}

impl SkewCategory {
    /// `0.0`, `-0.0` and NaN are all symmetric.
    pub fn from_skewness(skewness: f64) -> Self {
        if skewness < 0.0 {
            SkewCategory::Negative
        } else if skewness > 0.0 {
            SkewCategory::Positive
        } else {
            SkewCategory::Symmetric
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SkewCategory::Negative => "negative",
            SkewCategory::Symmetric => "symmetric",
            SkewCategory::Positive => "positive",
        }
    }

    /// Short category name, e.g. "Negativa".
    pub fn label(&self, language: Language) -> &'static str {
        let labels = language.labels();
        match self {
            SkewCategory::Negative => labels.negative,
            SkewCategory::Symmetric => labels.symmetric,
            SkewCategory::Positive => labels.positive,
        }
    }

    /// Sentence describing where the tail is and how mode, median and mean line up.
    pub fn explanation(&self, language: Language) -> &'static str {
        let labels = language.labels();
        match self {
            SkewCategory::Negative => labels.negative_explanation,
            SkewCategory::Symmetric => labels.symmetric_explanation,
            SkewCategory::Positive => labels.positive_explanation,
        }
    }
}
