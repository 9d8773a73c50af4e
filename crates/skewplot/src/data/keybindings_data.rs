//! Keybindings configuration data structures.
//!
//! Defines the structure for customizable keyboard shortcuts that can be
//! serialized to/from `~/.skewplot/keybindings.yaml`. Every field has a
//! default, so a file only needs the bindings it changes.

use serde::{Deserialize, Serialize};

/// Root keybindings configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    /// Global keybindings (work everywhere)
    pub global: GlobalBindings,
    /// Moving focus between sliders
    pub navigation: NavigationBindings,
    /// Changing the focused slider's value
    pub sliders: SliderBindings,
}

/// Global keybindings that work everywhere in the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalBindings {
    pub quit: Vec<String>,
    pub cancel: Vec<String>,
    pub reset: Vec<String>,
    pub randomize: Vec<String>,
    pub language: Vec<String>,
}

impl Default for GlobalBindings {
    fn default() -> Self {
        Self {
            quit: vec!["q".into(), "ctrl+c".into()],
            cancel: vec!["esc".into()],
            reset: vec!["r".into()],
            randomize: vec!["x".into()],
            language: vec!["g".into()],
        }
    }
}

/// Focus movement between the three sliders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
}

impl Default for NavigationBindings {
    fn default() -> Self {
        Self {
            up: vec!["k".into(), "up".into(), "shift+tab".into()],
            down: vec!["j".into(), "down".into(), "tab".into()],
        }
    }
}

/// Value changes on the focused slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderBindings {
    pub decrease: Vec<String>,
    pub increase: Vec<String>,
    pub decrease_coarse: Vec<String>,
    pub increase_coarse: Vec<String>,
}

impl Default for SliderBindings {
    fn default() -> Self {
        Self {
            decrease: vec!["h".into(), "left".into()],
            increase: vec!["l".into(), "right".into()],
            decrease_coarse: vec!["shift+h".into(), "shift+left".into()],
            increase_coarse: vec!["shift+l".into(), "shift+right".into()],
        }
    }
}

/// First configured binding for an action, for help text.
pub fn primary(bindings: &[String]) -> &str {
    bindings.first().map(String::as_str).unwrap_or("-")
}
