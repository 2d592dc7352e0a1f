//! Configuration module for the Text Analyzer
//!
//! This module handles application configuration including:
//! - Loading/saving configuration from files
//! - Default settings
//! - Where history and favorites are stored
//! - Theme settings

use std::path::PathBuf;
use std::fs;
use std::io;
use serde::{Deserialize, Serialize};
use once_cell::sync::Lazy;
use std::sync::Mutex;
use strum::{Display, EnumString};

use crate::store::DEFAULT_CAPACITY;

/// Which palette the UI uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum ThemeKind {
    #[default]
    #[strum(to_string = "Light", serialize = "light")]
    Light,
    #[strum(to_string = "Dark", serialize = "dark")]
    Dark,
}

impl ThemeKind {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Light => ThemeKind::Dark,
            ThemeKind::Dark => ThemeKind::Light,
        }
    }
}

/// Colors of one theme as hex strings (e.g., "#F5F5F5")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Borders and headings
    pub primary: String,
    /// Highlighted list rows and the focused panel
    pub accent: String,
    /// Background color (or "default" for terminal default)
    pub background: String,
    /// Text color (or "default" for terminal default)
    pub foreground: String,
    /// Status bar background
    pub status: String,
}

impl PaletteConfig {
    pub fn light() -> Self {
        Self {
            primary: "#0087AF".to_string(),
            accent: "#AF8700".to_string(),
            background: "#F5F5F5".to_string(),
            foreground: "#000000".to_string(),
            status: "#DDDDDD".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: "#00AF87".to_string(),
            accent: "#AF8700".to_string(),
            background: "#333333".to_string(),
            foreground: "#F5F5F5".to_string(),
            status: "#555555".to_string(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Active theme
    pub theme: ThemeKind,
    /// Colors used by the light theme
    pub light_palette: PaletteConfig,
    /// Colors used by the dark theme
    pub dark_palette: PaletteConfig,
    /// Directory holding history.txt and favorites.txt
    /// (relative to config directory; defaults to the config directory)
    pub data_dir: Option<String>,
    /// Entries kept per list
    pub list_capacity: usize,
    /// Seconds between automatic re-analysis when auto refresh is on
    pub auto_refresh_secs: u64,
    /// Terminal event tick in milliseconds
    pub tick_rate_ms: u64,
    /// Enable logging
    pub logging_enabled: bool,
    /// Log file path (relative to config directory)
    pub log_file: Option<String>,
    /// Minimum level written to the log ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeKind::default(),
            light_palette: PaletteConfig::light(),
            dark_palette: PaletteConfig::dark(),
            data_dir: None,
            list_capacity: DEFAULT_CAPACITY,
            auto_refresh_secs: 10,
            tick_rate_ms: 250,
            logging_enabled: false,
            log_file: Some("text-analyzer.log".to_string()),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Palette of the active theme
    pub fn palette(&self) -> &PaletteConfig {
        match self.theme {
            ThemeKind::Light => &self.light_palette,
            ThemeKind::Dark => &self.dark_palette,
        }
    }

    /// Resolve the directory holding the list files
    pub fn data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => get_config_dir().join(dir),
            None => get_config_dir(),
        }
    }
}

// Global configuration instance
static CONFIG: Lazy<Mutex<AppConfig>> = Lazy::new(|| {
    let config = load_config().unwrap_or_default();
    Mutex::new(config)
});

fn lock_config() -> std::sync::MutexGuard<'static, AppConfig> {
    CONFIG.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Get a copy of the application configuration
pub fn get_config() -> AppConfig {
    lock_config().clone()
}

/// Update a specific field in the configuration
pub fn update_field<F>(updater: F) -> Result<(), io::Error>
where
    F: FnOnce(&mut AppConfig),
{
    let mut config = lock_config();
    updater(&mut config);
    save_config(&config)
}

/// Get the config directory path
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".text-analyzer")
}

/// Get the config file path
pub fn get_config_file() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Parse configuration from YAML text
pub fn parse_config(config_str: &str) -> Result<AppConfig, io::Error> {
    serde_yaml::from_str(config_str).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Load configuration from file
pub fn load_config() -> Result<AppConfig, io::Error> {
    let config_file = get_config_file();

    if !config_file.exists() {
        return Ok(AppConfig::default());
    }

    let config_str = fs::read_to_string(config_file)?;
    parse_config(&config_str)
}

/// Save configuration to file
pub fn save_config(config: &AppConfig) -> Result<(), io::Error> {
    let config_dir = get_config_dir();
    let config_file = get_config_file();

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }

    let config_str = serde_yaml::to_string(config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(config_file, config_str)
}

/// Initialize configuration on application start
pub fn init_config() -> Result<(), io::Error> {
    let config_dir = get_config_dir();
    let config_file = get_config_file();

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }

    if !config_file.exists() {
        let default_config = AppConfig::default();
        save_config(&default_config)?;
    }

    // Load config into memory
    let loaded_config = load_config()?;
    *lock_config() = loaded_config;

    Ok(())
}
