use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConsoleError;

/// Operator-facing console settings, persisted as config.json next to
/// the show files by default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub shows_directory: Option<PathBuf>,
    pub enable_autosave: bool,
    pub autosave_interval_secs: u32,
    pub enforce_pan_tilt_limits: bool,
    pub default_move_while_dark: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shows_directory: None,
            enable_autosave: false,
            autosave_interval_secs: 300,
            enforce_pan_tilt_limits: true,
            default_move_while_dark: false,
        }
    }
}

/// Configuration option with validation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigOption<T> {
    pub default: T,
    pub valid_range: Option<(T, T)>,
    pub description: String,
}

/// Available configuration options with validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSchema {
    pub enable_autosave: ConfigOption<bool>,
    pub autosave_interval_secs: ConfigOption<u32>,
    pub enforce_pan_tilt_limits: ConfigOption<bool>,
    pub default_move_while_dark: ConfigOption<bool>,
}

/// Persisted configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    pub settings: Settings,
    pub created_at: String,
    pub modified_at: String,
}

pub struct ConfigManager {
    config_path: PathBuf,
    settings: Settings,
}

impl ConfigManager {
    /// If no path is provided, defaults to 'config.json' in the
    /// current working directory.
    pub fn new(config_path: Option<PathBuf>) -> Self {
        let config_path = config_path.unwrap_or_else(|| PathBuf::from("config.json"));

        Self {
            config_path,
            settings: Settings::default(),
        }
    }

    /// Load settings from the configuration file, creating it with
    /// defaults if it doesn't exist yet.
    pub fn load(&mut self) -> Result<Settings, ConsoleError> {
        if !self.config_path.exists() {
            self.save()?;
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(&self.config_path)?;
        let config_file: ConfigFile = serde_json::from_str(&content)?;

        if config_file.version != env!("CARGO_PKG_VERSION") {
            log::warn!(
                "config file version {} doesn't match application version {}, using defaults for new settings",
                config_file.version,
                env!("CARGO_PKG_VERSION")
            );
        }

        self.settings = config_file.settings;
        Ok(self.settings.clone())
    }

    /// Save current settings to the configuration file.
    pub fn save(&self) -> Result<(), ConsoleError> {
        if let Some(parent) = self.config_path.parent() {
            if parent != Path::new("") && parent != Path::new(".") {
                fs::create_dir_all(parent)?;
            }
        }

        let config_file = ConfigFile {
            version: env!("CARGO_PKG_VERSION").to_string(),
            settings: self.settings.clone(),
            created_at: chrono::Utc::now().to_rfc3339(),
            modified_at: chrono::Utc::now().to_rfc3339(),
        };

        let content = serde_json::to_string_pretty(&config_file)?;
        fs::write(&self.config_path, content)?;

        Ok(())
    }

    /// Validate, update, and persist new settings in one step.
    pub fn update_settings(&mut self, settings: Settings) -> Result<(), ConsoleError> {
        Self::validate_settings(&settings)?;
        self.settings = settings;
        self.save()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn schema() -> ConfigSchema {
        ConfigSchema {
            enable_autosave: ConfigOption {
                default: false,
                valid_range: None,
                description: "Automatically save the show file at regular intervals".to_string(),
            },
            autosave_interval_secs: ConfigOption {
                default: 300,
                valid_range: Some((60, 3600)),
                description: "Autosave interval in seconds".to_string(),
            },
            enforce_pan_tilt_limits: ConfigOption {
                default: true,
                valid_range: None,
                description: "Clamp recorded positions to the fixture model's travel range"
                    .to_string(),
            },
            default_move_while_dark: ConfigOption {
                default: false,
                valid_range: None,
                description: "Whether newly recorded cue lists allow move-while-dark".to_string(),
            },
        }
    }

    pub fn validate_settings(settings: &Settings) -> Result<(), ConsoleError> {
        let schema = Self::schema();

        if let Some((min, max)) = schema.autosave_interval_secs.valid_range {
            if settings.autosave_interval_secs < min || settings.autosave_interval_secs > max {
                return Err(ConsoleError::out_of_range(
                    "Settings",
                    "autosave_interval_secs",
                    settings.autosave_interval_secs as f64,
                    min as f64,
                    max as f64,
                ));
            }
        }

        Ok(())
    }

    pub fn reset_to_defaults(&mut self) -> Result<(), ConsoleError> {
        self.settings = Settings::default();
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let mut manager = ConfigManager::new(Some(config_path.clone()));
        let mut settings = Settings::default();
        settings.enable_autosave = true;
        settings.autosave_interval_secs = 120;
        manager.update_settings(settings).unwrap();

        let mut manager2 = ConfigManager::new(Some(config_path));
        let loaded = manager2.load().unwrap();
        assert!(loaded.enable_autosave);
        assert_eq!(loaded.autosave_interval_secs, 120);
    }

    #[test]
    fn load_creates_default_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let mut manager = ConfigManager::new(Some(config_path.clone()));
        let loaded = manager.load().unwrap();
        assert_eq!(loaded, Settings::default());
        assert!(config_path.exists());
    }

    #[test]
    fn validation_rejects_out_of_range_interval() {
        let mut settings = Settings::default();
        assert!(ConfigManager::validate_settings(&settings).is_ok());

        settings.autosave_interval_secs = 10;
        let err = ConfigManager::validate_settings(&settings).unwrap_err();
        assert!(matches!(err, ConsoleError::OutOfRange { .. }));
    }

    #[test]
    fn malformed_file_surfaces_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "not json").unwrap();

        let mut manager = ConfigManager::new(Some(config_path));
        let err = manager.load().unwrap_err();
        assert!(err.is_storage());
    }
}
