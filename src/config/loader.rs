//! Configuration file loading with precedence handling.

use super::keybindings::{BuiltinBindings, KeyBindingsSection};
use crate::format::tables::{is_valid_date_format, DEFAULT_NAME_WIDTH};
use crate::format::DEFAULT_DATE_FORMAT;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "CONBROWSE_CONFIG";

/// Environment variable overriding the date format.
pub const DATE_FORMAT_ENV_VAR: &str = "CONBROWSE_DATE_FORMAT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// The resolved date format is not a valid strftime string.
    #[error("Invalid date format: {0:?}")]
    InvalidDateFormat(String),
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/conbrowse/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// strftime string for start/end dates (e.g. "%d.%m.%Y").
    #[serde(default)]
    pub date_format: Option<String>,

    /// Maximum display width of consumable names.
    #[serde(default)]
    pub name_width: Option<usize>,

    /// Disable colors.
    #[serde(default)]
    pub no_color: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Key overrides for the built-in actions.
    #[serde(default)]
    pub keybindings: Option<KeyBindingsSection>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// strftime string for dates.
    pub date_format: String,
    /// Maximum display width of consumable names.
    pub name_width: usize,
    /// Colors disabled.
    pub no_color: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Keys for the built-in actions.
    pub keybindings: BuiltinBindings,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            name_width: DEFAULT_NAME_WIDTH,
            no_color: false,
            log_file_path: default_log_path(),
            keybindings: BuiltinBindings::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/conbrowse/conbrowse.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("conbrowse").join("conbrowse.log")
    } else {
        PathBuf::from("conbrowse.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/conbrowse/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("conbrowse").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CONBROWSE_CONFIG` environment variable
/// 3. Default path `~/.config/conbrowse/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        date_format: config.date_format.unwrap_or(defaults.date_format),
        name_width: config.name_width.unwrap_or(defaults.name_width),
        no_color: config.no_color.unwrap_or(defaults.no_color),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        keybindings: config
            .keybindings
            .as_ref()
            .map_or(defaults.keybindings, BuiltinBindings::with_overrides),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CONBROWSE_DATE_FORMAT`: Override date format
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(date_format) = std::env::var(DATE_FORMAT_ENV_VAR) {
        config.date_format = date_format;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    date_format_override: Option<String>,
    no_color_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(date_format) = date_format_override {
        config.date_format = date_format;
    }

    if let Some(no_color) = no_color_override {
        config.no_color = no_color;
    }

    config
}

/// Reject resolved values that would only fail later, mid-render.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDateFormat`] for an unrenderable date format.
pub fn validate_config(config: &ResolvedConfig) -> Result<(), ConfigError> {
    if !is_valid_date_format(&config.date_format) {
        return Err(ConfigError::InvalidDateFormat(config.date_format.clone()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
