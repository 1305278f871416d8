//! Configuration management
//!
//! A single TOML file holds the staff profile shown after login, UI
//! behaviour and logging settings.

mod store;

pub use store::{Config, LogConfig, StaffConfig, UiConfig};

use std::path::PathBuf;

pub const APP_DIR: &str = "daycare-staff";
pub const STAFF_NAME_ENV: &str = "DAYCARE_STAFF_NAME";

/// Get the configuration directory path
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .map(|d| d.join(APP_DIR))
}

/// Directory for the debug log file.
pub fn get_data_dir() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))
        .map(|d| d.join(APP_DIR))
}

pub fn default_log_path() -> Option<PathBuf> {
    get_data_dir().map(|d| d.join("debug.log"))
}
