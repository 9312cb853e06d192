// Bookmark Gallery Settings Engine
// Loads gallery settings from a JSON file at an explicit path or the platform config path.
// Changes made at runtime stay in memory; nothing is written back.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::GallerySettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<GallerySettings, SettingsError>;
    fn get_settings(&self) -> &GallerySettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self);
    fn get_config_path(&self) -> &str;
}

/// Settings engine reading a JSON config file.
pub struct SettingsEngine {
    config_path: String,
    settings: GallerySettings,
    loaded_from_file: bool,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with `settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            settings: GallerySettings::default(),
            loaded_from_file: false,
        }
    }

    /// Whether the last `load` found a settings file on disk.
    pub fn loaded_from_file(&self) -> bool {
        self.loaded_from_file
    }
}

/// Rejects blank labels; they would surface as empty titles, folders or categories.
fn validate(settings: &GallerySettings) -> Result<(), SettingsError> {
    let labels = [
        ("import.untitled_label", &settings.import.untitled_label),
        ("import.uncategorized_folder", &settings.import.uncategorized_folder),
        ("categorization.fallback_category", &settings.categorization.fallback_category),
    ];
    match labels.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((key, _)) => Err(SettingsError::InvalidValue(format!("'{}' cannot be empty", key))),
        None => Ok(()),
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// A missing file yields the defaults. Sections or fields left out of the
    /// file take their default values; a malformed file or a blank label is an
    /// error.
    fn load(&mut self) -> Result<GallerySettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            debug!("No settings file at {}, using defaults", self.config_path);
            self.settings = GallerySettings::default();
            self.loaded_from_file = false;
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::Io(format!("Failed to read config file: {}", e)))?;

        let settings: GallerySettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::Serialization(format!("Failed to parse config file: {}", e))
        })?;
        validate(&settings)?;

        self.settings = settings;
        self.loaded_from_file = true;
        Ok(self.settings.clone())
    }

    fn get_settings(&self) -> &GallerySettings {
        &self.settings
    }

    /// Updates an individual setting by dot-notation key path, e.g.
    /// `"view.sort_order"` or `"import.untitled_label"`.
    ///
    /// The settings are round-tripped through a `serde_json::Value` so the new
    /// value is type-checked against `GallerySettings`.
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let mut json_value = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::Serialization(format!("Failed to serialize settings: {}", e))
        })?;

        let (parents, last) = match key.rsplit_once('.') {
            Some((parents, last)) => (parents.split('.').collect::<Vec<_>>(), last),
            None => (Vec::new(), key),
        };

        let mut current = &mut json_value;
        for part in parents {
            current = current
                .get_mut(part)
                .ok_or_else(|| SettingsError::InvalidKey(format!("Key '{}' not found in settings", key)))?;
        }

        match current {
            serde_json::Value::Object(map) if map.contains_key(last) => {
                map.insert(last.to_string(), value);
            }
            serde_json::Value::Object(_) => {
                return Err(SettingsError::InvalidKey(format!(
                    "Key '{}' not found in settings",
                    key
                )));
            }
            _ => {
                return Err(SettingsError::InvalidKey(format!(
                    "Cannot navigate to key '{}': intermediate value is not an object",
                    key
                )));
            }
        }

        let new_settings: GallerySettings = serde_json::from_value(json_value).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;
        validate(&new_settings)?;

        self.settings = new_settings;
        Ok(())
    }

    fn reset(&mut self) {
        self.settings = GallerySettings::default();
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
