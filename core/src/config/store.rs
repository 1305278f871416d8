//! Configuration Store
//!
//! Handles loading/saving the TOML config file.

use super::{get_config_dir, STAFF_NAME_ENV};
use crate::error::{DaycareError, Result};
use crate::logger::DEFAULT_MAX_ENTRIES;
use crate::mock::DEFAULT_STAFF_PHOTO;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Staff member shown after login
    #[serde(default)]
    pub staff: StaffConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LogConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DaycareError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| DaycareError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        let write_err = |source| DaycareError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, content).map_err(write_err)
    }

    /// Load from `path` (or the default location); missing or broken files give defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Get default config file path
    pub fn default_path() -> Option<PathBuf> {
        get_config_dir().map(|d| d.join("config.toml"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffConfig {
    #[serde(default = "default_staff_name")]
    pub name: String,

    #[serde(default = "default_staff_photo")]
    pub photo: String,

    #[serde(default = "default_room")]
    pub room: String,
}

impl Default for StaffConfig {
    fn default() -> Self {
        Self {
            name: default_staff_name(),
            photo: default_staff_photo(),
            room: default_room(),
        }
    }
}

fn default_staff_name() -> String {
    std::env::var(STAFF_NAME_ENV)
        .ok()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "Sarah Johnson".to_string())
}

fn default_staff_photo() -> String {
    DEFAULT_STAFF_PHOTO.to_string()
}

fn default_room() -> String {
    "Sunshine Room".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Ask before logging out
    #[serde(default = "default_true")]
    pub confirm_logout: bool,

    #[serde(default = "default_true")]
    pub show_bottom_nav: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            confirm_logout: true,
            show_bottom_nav: true,
        }
    }
}

fn default_tick_rate() -> u64 {
    250
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Also append log lines to the data directory
    #[serde(default)]
    pub file_enabled: bool,

    /// Ring buffer size
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file_enabled: false,
            max_entries: default_max_entries(),
        }
    }
}

fn default_max_entries() -> usize {
    DEFAULT_MAX_ENTRIES
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_static::lazy_static;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests touching DAYCARE_STAFF_NAME must not interleave.
    lazy_static! {
        static ref ENV_LOCK: Mutex<()> = Mutex::new(());
    }

    #[test]
    fn test_config_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var(STAFF_NAME_ENV);
        let config = Config::default();
        assert_eq!(config.staff.name, "Sarah Johnson");
        assert_eq!(config.staff.room, "Sunshine Room");
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert!(config.ui.confirm_logout);
        assert!(!config.logging.file_enabled);
        assert_eq!(config.logging.max_entries, DEFAULT_MAX_ENTRIES);
    }

    #[test]
    fn test_staff_name_from_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(STAFF_NAME_ENV, "Maya Lee");
        let config = Config::default();
        std::env::remove_var(STAFF_NAME_ENV);
        assert_eq!(config.staff.name, "Maya Lee");
    }

    #[test]
    fn test_config_save_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.staff.room = "Rainbow Room".to_string();
        config.ui.show_bottom_nav = false;
        config.save(&config_path).unwrap();

        let loaded = Config::load(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[staff]\nname = \"Ana Ruiz\"\n\n[ui]\ntick_rate_ms = 100\n").unwrap();

        let loaded = Config::load(&config_path).unwrap();
        assert_eq!(loaded.staff.name, "Ana Ruiz");
        assert_eq!(loaded.staff.room, "Sunshine Room");
        assert_eq!(loaded.ui.tick_rate_ms, 100);
        assert!(loaded.ui.confirm_logout);
    }

    #[test]
    fn test_parse_error_names_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[staff\nname = ").unwrap();

        let err = Config::load(&config_path).unwrap_err();
        assert!(matches!(err, DaycareError::ConfigParse { .. }));
        assert!(err.to_string().contains("config.toml"));

        let fallback = Config::load_or_default(Some(&config_path));
        assert_eq!(fallback.ui, UiConfig::default());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load(temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, DaycareError::ConfigRead { .. }));
    }
}
