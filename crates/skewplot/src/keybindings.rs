//! Keybindings matching utilities.
//!
//! Provides functions to convert an AppKeyEvent to the string format used in
//! `keybindings.yaml`, and to check if a key event matches configured bindings.

#[cfg(feature = "native")]
use std::path::Path;

use crate::data::keybindings_data::KeybindingsConfig;
#[cfg(feature = "native")]
use crate::data::storage::StorageError;
use crate::event::{AppKeyEvent, KeyCode};

impl KeybindingsConfig {
    /// Convert an AppKeyEvent to our string format.
    ///
    /// Examples:
    /// - KeyCode::Char('a') with no modifiers -> "a"
    /// - KeyCode::Char('c') with ctrl -> "ctrl+c"
    /// - KeyCode::Char('H') with shift -> "shift+h"
    /// - KeyCode::Left with shift -> "shift+left"
    pub fn app_key_to_string(key: &AppKeyEvent) -> String {
        let mut parts = Vec::new();

        if key.ctrl {
            parts.push("ctrl");
        }
        if key.alt {
            parts.push("alt");
        }

        let key_str = match &key.code {
            KeyCode::Char(c) => {
                if key.shift && (c.is_uppercase() || !c.is_alphabetic()) {
                    parts.push("shift");
                }
                c.to_lowercase().to_string()
            }
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Delete => "delete".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::PageUp => "pageup".to_string(),
            KeyCode::PageDown => "pagedown".to_string(),
            KeyCode::F(n) => format!("f{}", n),
            KeyCode::Tab | KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                if key.shift {
                    parts.push("shift");
                }
                match &key.code {
                    KeyCode::Tab => "tab",
                    KeyCode::Up => "up",
                    KeyCode::Down => "down",
                    KeyCode::Left => "left",
                    _ => "right",
                }
                .to_string()
            }
            #[cfg(feature = "native")]
            KeyCode::BackTab => {
                // BackTab is Shift+Tab
                if !parts.contains(&"shift") {
                    parts.push("shift");
                }
                "tab".to_string()
            }
            _ => return String::new(), // Unsupported key
        };

        parts.push(&key_str);
        parts.join("+")
    }

    /// Check if an AppKeyEvent matches any of the configured bindings.
    pub fn matches(key: &AppKeyEvent, bindings: &[String]) -> bool {
        let key_str = Self::app_key_to_string(key);
        if key_str.is_empty() {
            return false;
        }
        bindings.iter().any(|b| b.eq_ignore_ascii_case(&key_str))
    }

    /// Get the keybindings file path
    #[cfg(feature = "native")]
    pub fn path(data_dir: &Path) -> std::path::PathBuf {
        data_dir.join("keybindings.yaml")
    }

    /// Load keybindings from file. A missing file yields the defaults.
    #[cfg(feature = "native")]
    pub fn load(data_dir: &Path) -> Result<Self, StorageError> {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read keybindings: {}", e)))?;
        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Invalid keybindings.yaml: {}", e)))
    }

    /// Save keybindings to file.
    #[cfg(feature = "native")]
    pub fn save(&self, data_dir: &Path) -> Result<(), StorageError> {
        let yaml = serde_saphyr::to_string(self).map_err(|e| {
            StorageError::Serialize(format!("Failed to serialize keybindings: {}", e))
        })?;

        std::fs::write(Self::path(data_dir), yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write keybindings: {}", e)))
    }
}
