//! Application settings.
//!
//! `AppSettings` is persisted as pretty JSON at
//! `~/.config/hwcompare/settings.json`. The API credential is deliberately
//! not part of it: it comes from the process environment only.
//!
//! # Module Structure
//!
//! - `loader`: path resolution and raw file load/save

pub mod loader;

use crate::collaborator::IntegrationMode;
use crate::error::ConfigError;
use crate::models::HardwareKind;
use std::path::Path;

/// Environment variables consulted for the credential, in order
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

pub const MAX_TIMEOUT_SECS: u64 = 600;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Persisted application settings
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // Collaborator
    pub model: String,
    pub api_base_url: String,
    pub integration_mode: IntegrationMode,
    /// Only honoured in free-text mode
    pub search_grounding: bool,
    pub request_timeout_secs: u64,

    // Diagnostics
    pub log_level: String,

    // View
    pub initial_mode: HardwareKind,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            model: "gemini-2.5-pro".to_string(),
            api_base_url: "https://generativelanguage.googleapis.com".to_string(),
            integration_mode: IntegrationMode::Structured,
            search_grounding: false,
            request_timeout_secs: 120,
            log_level: "info".to_string(),
            initial_mode: HardwareKind::Cpu,
        }
    }
}

impl AppSettings {
    /// Parsed log level; unknown strings fall back to `Info`
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level
            .trim()
            .parse::<log::LevelFilter>()
            .unwrap_or(log::LevelFilter::Info)
    }
}

/// Reject settings that would make every request fail.
pub fn validate_settings(settings: &AppSettings) -> Result<(), ConfigError> {
    if settings.model.trim().is_empty() {
        return Err(ConfigError::ValidationFailed("model cannot be empty".to_string()));
    }

    let url = settings.api_base_url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::ValidationFailed(format!(
            "api_base_url must start with http:// or https://, got '{}'",
            settings.api_base_url
        )));
    }

    if settings.request_timeout_secs == 0 || settings.request_timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::ValidationFailed(format!(
            "request_timeout_secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, settings.request_timeout_secs
        )));
    }

    let level = settings.log_level.trim().to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::ValidationFailed(format!(
            "Unknown log_level '{}'",
            settings.log_level
        )));
    }

    Ok(())
}

/// Loads and saves [`AppSettings`]
pub struct SettingsManager;

impl SettingsManager {
    /// Load settings from the global path, or defaults if it cannot be resolved
    pub fn load() -> AppSettings {
        match loader::get_global_settings_path() {
            Ok(path) => Self::load_or_seed(&path),
            Err(e) => {
                log::warn!("[Config] {}; using defaults", e);
                AppSettings::default()
            }
        }
    }

    /// Load settings from `path`.
    ///
    /// A missing file yields defaults. A file that fails to parse or validate
    /// logs a warning and also yields defaults.
    pub fn load_from(path: &Path) -> AppSettings {
        match loader::load_settings_from_file(path) {
            Ok(settings) => match validate_settings(&settings) {
                Ok(()) => settings,
                Err(e) => {
                    log::warn!("[Config] {} in {}, falling back to defaults", e, path.display());
                    AppSettings::default()
                }
            },
            Err(ConfigError::FileNotFound(_)) => {
                log::debug!("[Config] No settings at {}, using defaults", path.display());
                AppSettings::default()
            }
            Err(e) => {
                log::warn!("[Config] Failed to load {}, falling back to defaults: {}", path.display(), e);
                AppSettings::default()
            }
        }
    }

    /// Like [`load_from`](Self::load_from), but a missing file is first
    /// written with defaults so there is something to edit.
    pub fn load_or_seed(path: &Path) -> AppSettings {
        if path.exists() {
            return Self::load_from(path);
        }
        let settings = AppSettings::default();
        match Self::save_to(path, &settings) {
            Ok(()) => log::info!("[Config] Wrote default settings to {}", path.display()),
            Err(e) => log::warn!("[Config] Could not write defaults to {}: {}", path.display(), e),
        }
        settings
    }

    pub fn save_to(path: &Path, settings: &AppSettings) -> Result<(), ConfigError> {
        validate_settings(settings)?;
        loader::save_settings_to_file(settings, path)
    }
}

/// Credential from the process environment
pub fn api_key_from_env() -> Option<String> {
    api_key_from(|name| std::env::var(name).ok())
}

/// First non-blank value among [`API_KEY_VARS`] according to `lookup`
pub fn api_key_from<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    API_KEY_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}
