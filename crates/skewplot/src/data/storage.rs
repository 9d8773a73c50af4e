//! Data directory layout (native only for file access)
//!
//! Directory structure:
//! ~/.skewplot/
//!   settings.yaml        # Language and initial slider positions
//!   keybindings.yaml     # Key overrides
//!   skewplot.log         # Rotated log file

#[cfg(feature = "native")]
use std::fs;
#[cfg(feature = "native")]
use std::path::PathBuf;

#[cfg(feature = "native")]
use super::keybindings_data::KeybindingsConfig;
#[cfg(feature = "native")]
use super::settings_data::Settings;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the data directory holding configuration and logs (native only)
#[cfg(feature = "native")]
pub struct DataDirectory {
    root: PathBuf,
}

#[cfg(feature = "native")]
impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.skewplot/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".skewplot")
    }

    fn settings_path(&self) -> PathBuf {
        self.root.join("settings.yaml")
    }

    /// Create the data directory if needed
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Load settings.yaml. A missing file yields the defaults.
    pub fn load_settings(&self) -> Result<Settings, StorageError> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read settings: {}", e)))?;
        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Invalid settings.yaml: {}", e)))
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), StorageError> {
        self.init()?;
        let yaml = serde_saphyr::to_string(settings)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize settings: {}", e)))?;
        fs::write(self.settings_path(), yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write settings: {}", e)))
    }

    pub fn load_keybindings(&self) -> Result<KeybindingsConfig, StorageError> {
        KeybindingsConfig::load(&self.root)
    }

    /// Write default settings.yaml and keybindings.yaml for hand editing.
    ///
    /// Existing files are left alone. Returns the paths that were written.
    pub fn write_defaults(&self) -> Result<Vec<PathBuf>, StorageError> {
        self.init()?;
        let mut written = Vec::new();

        if !self.settings_path().exists() {
            self.save_settings(&Settings::default())?;
            written.push(self.settings_path());
        }

        let keybindings_path = KeybindingsConfig::path(&self.root);
        if !keybindings_path.exists() {
            KeybindingsConfig::default().save(&self.root)?;
            written.push(keybindings_path);
        }

        Ok(written)
    }
}
