//! Startup settings.
//!
//! Serialized to/from `~/.skewplot/settings.yaml`:
//!
//! ```yaml
//! language: en
//! initial:
//!   mean: 0.5
//!   std_dev: 1.2
//!   skewness: -0.3
//! ```
//!
//! These only choose where the sliders start. Parameter changes made in the
//! widget are never written back.

use serde::{Deserialize, Serialize};
use skewplot_core::{Language, Parameters};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: Language,
    pub initial: Parameters,
}

/// Values given on the command line, taking precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub skewness: Option<f64>,
    pub language: Option<Language>,
}

impl Settings {
    /// Apply command line overrides and snap the initial parameters into range.
    pub fn with_overrides(mut self, overrides: &SettingsOverrides) -> Self {
        if let Some(mean) = overrides.mean {
            self.initial.mean = mean;
        }
        if let Some(std_dev) = overrides.std_dev {
            self.initial.std_dev = std_dev;
        }
        if let Some(skewness) = overrides.skewness {
            self.initial.skewness = skewness;
        }
        if let Some(language) = overrides.language {
            self.language = language;
        }
        self.initial = self.initial.snapped();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_take_precedence() {
        let settings = Settings {
            language: Language::Spanish,
            initial: Parameters::new(1.0, 1.0, 0.5),
        };
        let overrides = SettingsOverrides {
            skewness: Some(-0.2),
            language: Some(Language::English),
            ..Default::default()
        };

        let merged = settings.with_overrides(&overrides);
        assert_eq!(merged.language, Language::English);
        assert_eq!(merged.initial, Parameters::new(1.0, 1.0, -0.2));
    }

    #[test]
    fn test_out_of_range_values_are_snapped() {
        let overrides = SettingsOverrides {
            mean: Some(7.0),
            std_dev: Some(0.0),
            skewness: Some(0.33),
            language: None,
        };
        let merged = Settings::default().with_overrides(&overrides);
        assert_eq!(merged.initial, Parameters::new(2.0, 0.5, 0.3));
    }
}
