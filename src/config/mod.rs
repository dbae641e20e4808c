// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[toasts]` - Toast overlay capacity and auto-dismiss timing
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set `ICED_TOAST_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast_context::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::notifications::Severity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToastContext";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOAST_CONFIG_DIR";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Toast overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Number of toasts shown at once before queuing.
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,

    /// Seconds before a success toast auto-dismisses (0 = manual dismiss).
    #[serde(default = "default_success_secs")]
    pub success_secs: u64,

    #[serde(default = "default_info_secs")]
    pub info_secs: u64,

    #[serde(default = "default_warning_secs")]
    pub warning_secs: u64,

    /// Errors stay until dismissed unless this is non-zero.
    #[serde(default)]
    pub error_secs: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            max_visible: DEFAULT_MAX_VISIBLE,
            success_secs: default_success_secs(),
            info_secs: default_info_secs(),
            warning_secs: default_warning_secs(),
            error_secs: 0,
        }
    }
}

impl ToastConfig {
    /// Visible toast capacity, clamped to the supported range.
    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible.clamp(MIN_MAX_VISIBLE, MAX_MAX_VISIBLE)
    }

    /// Auto-dismiss delay for a severity, `None` meaning manual dismiss.
    #[must_use]
    pub fn dismiss_after(&self, severity: Severity) -> Option<Duration> {
        let secs = match severity {
            Severity::Success => self.success_secs,
            Severity::Info => self.info_secs,
            Severity::Warning => self.warning_secs,
            Severity::Error => self.error_secs,
        };
        (secs > 0).then(|| Duration::from_secs(secs.min(MAX_DISMISS_SECS)))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub toasts: ToastConfig,
}

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}

fn default_success_secs() -> u64 {
    DEFAULT_SUCCESS_SECS
}

fn default_info_secs() -> u64 {
    DEFAULT_INFO_SECS
}

fn default_warning_secs() -> u64 {
    DEFAULT_WARNING_SECS
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring the explicit override first,
/// then `ICED_TOAST_CONFIG_DIR`, then the platform default.
pub fn get_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
