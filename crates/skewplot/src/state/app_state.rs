use rand::Rng;
use skewplot_core::{CurveSnapshot, Language, ParameterKind, Parameters};

use crate::data::keybindings_data::KeybindingsConfig;
use crate::data::settings_data::Settings;

/// Number of grid steps moved by the coarse adjust keys.
pub const COARSE_STEPS: i32 = 5;

/// Widget state. Only the three parameter values change through the sliders;
/// everything shown on screen is recomputed from them on each draw.
#[derive(Debug)]
pub struct AppState {
    pub parameters: Parameters,
    /// Slider positions restored by reset
    pub initial_parameters: Parameters,
    pub focused: ParameterKind,
    pub language: Language,
    pub keybindings: KeybindingsConfig,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default(), KeybindingsConfig::default())
    }
}

impl AppState {
    pub fn new(settings: Settings, keybindings: KeybindingsConfig) -> Self {
        let initial = settings.initial.snapped();
        Self {
            parameters: initial,
            initial_parameters: initial,
            focused: ParameterKind::Mean,
            language: settings.language,
            keybindings,
            error_message: None,
            exit: false,
        }
    }

    /// Everything needed to draw the chart and statistics panel.
    pub fn snapshot(&self) -> CurveSnapshot {
        CurveSnapshot::compute(&self.parameters)
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Move the focused slider by `steps` grid points.
    pub fn adjust_focused(&mut self, steps: i32) {
        let kind = self.focused;
        self.parameters.step(kind, steps);
        tracing::debug!(
            parameter = kind.key(),
            value = self.parameters.get(kind),
            steps,
            "Parameter adjusted"
        );
    }

    /// Set one parameter directly, snapped into its range.
    pub fn set_parameter(&mut self, kind: ParameterKind, value: f64) {
        self.parameters.set(kind, value);
        tracing::debug!(
            parameter = kind.key(),
            value = self.parameters.get(kind),
            "Parameter set"
        );
    }

    pub fn reset_parameters(&mut self) {
        self.parameters = self.initial_parameters;
        tracing::debug!(parameters = ?self.parameters, "Parameters reset");
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.parameters = Parameters::random(rng);
        tracing::debug!(parameters = ?self.parameters, "Parameters randomized");
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
        tracing::debug!(language = self.language.code(), "Language switched");
    }

    pub fn set_error(&mut self, msg: String) {
        tracing::warn!("{}", msg);
        self.error_message = Some(msg);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
