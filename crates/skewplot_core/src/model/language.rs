//! Display text for the widget.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParameterKind;

/// Display language. Spanish is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "es", alias = "spanish")]
    Spanish,
    #[serde(rename = "en", alias = "english")]
    English,
}

/// Every user-facing string for one language.
#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub parameters_title: &'static str,
    pub statistics_title: &'static str,
    pub mean: &'static str,
    pub std_dev: &'static str,
    pub skewness: &'static str,
    pub mode: &'static str,
    pub median: &'static str,
    pub skew_type: &'static str,
    pub explanation: &'static str,
    pub negative: &'static str,
    pub symmetric: &'static str,
    pub positive: &'static str,
    pub negative_explanation: &'static str,
    pub symmetric_explanation: &'static str,
    pub positive_explanation: &'static str,
}

const SPANISH: Labels = Labels {
    title: " Distribución asimétrica interactiva ",
    parameters_title: " Parámetros ",
    statistics_title: " Estadísticas ",
    mean: "Media",
    std_dev: "Desviación estándar",
    skewness: "Asimetría",
    mode: "Moda",
    median: "Mediana",
    skew_type: "Tipo de asimetría",
    explanation: "Explicación",
    negative: "Negativa",
    symmetric: "Normal (sin asimetría)",
    positive: "Positiva",
    negative_explanation: "La cola izquierda es más larga. La moda está a la derecha, seguida por la mediana y luego la media.",
    symmetric_explanation: "La distribución es simétrica. La moda, mediana y media coinciden.",
    positive_explanation: "La cola derecha es más larga. La moda está a la izquierda, seguida por la mediana y luego la media.",
};

const ENGLISH: Labels = Labels {
    title: " Interactive Skewed Distribution ",
    parameters_title: " Parameters ",
    statistics_title: " Statistics ",
    mean: "Mean",
    std_dev: "Standard Deviation",
    skewness: "Skewness",
    mode: "Mode",
    median: "Median",
    skew_type: "Skew type",
    explanation: "Explanation",
    negative: "Negative",
    symmetric: "Normal (no skew)",
    positive: "Positive",
    negative_explanation: "The left tail is longer. The mode is to the right, followed by the median and then the mean.",
    symmetric_explanation: "The distribution is symmetric. Mode, median and mean coincide.",
    positive_explanation: "The right tail is longer. The mode is to the left, followed by the median and then the mean.",
};

impl Language {
    pub const ALL: [Language; 2] = [Language::Spanish, Language::English];

    pub fn labels(&self) -> &'static Labels {
        match self {
            Language::Spanish => &SPANISH,
            Language::English => &ENGLISH,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }

    /// Label shown next to a slider.
    pub fn parameter_label(&self, kind: ParameterKind) -> &'static str {
        let labels = self.labels();
        match kind {
            ParameterKind::Mean => labels.mean,
            ParameterKind::StdDev => labels.std_dev,
            ParameterKind::Skewness => labels.skewness,
        }
    }

    /// The other language.
    pub fn toggled(&self) -> Self {
        match self {
            Language::Spanish => Language::English,
            Language::English => Language::Spanish,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "es" | "spanish" | "español" => Ok(Language::Spanish),
            "en" | "english" => Ok(Language::English),
            other => Err(format!("unknown language '{other}' (expected 'es' or 'en')")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language() {
        assert_eq!("es".parse::<Language>(), Ok(Language::Spanish));
        assert_eq!("EN".parse::<Language>(), Ok(Language::English));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_toggle_round_trips() {
        for language in Language::ALL {
            assert_eq!(language.toggled().toggled(), language);
        }
    }

    #[test]
    fn test_parameter_labels() {
        assert_eq!(Language::Spanish.parameter_label(ParameterKind::Skewness), "Asimetría");
        assert_eq!(
            Language::English.parameter_label(ParameterKind::StdDev),
            "Standard Deviation"
        );
    }

    #[test]
    fn test_spanish_table_is_fully_localized() {
        let labels = Language::Spanish.labels();
        assert_eq!(labels.title.trim(), "Distribución asimétrica interactiva");
        assert_eq!(labels.mean, "Media");
        assert_eq!(labels.std_dev, "Desviación estándar");
        assert_eq!(labels.mode, "Moda");
        assert_eq!(labels.median, "Mediana");
    }

    #[test]
    fn test_mean_slider_and_statistic_share_label() {
        for language in Language::ALL {
            assert_eq!(language.parameter_label(ParameterKind::Mean), language.labels().mean);
        }
    }
}
