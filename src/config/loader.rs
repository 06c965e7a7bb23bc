//! Configuration file loading with precedence handling.

use crate::state::ThreadMode;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "CHATDECK_CONFIG";

/// Environment variable naming a chat data file.
pub const DATA_ENV_VAR: &str = "CHATDECK_DATA";

/// Environment variable overriding the thread mode.
pub const THREAD_MODE_ENV_VAR: &str = "CHATDECK_THREAD_MODE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/chatdeck/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Start with the directory panel expanded.
    #[serde(default)]
    pub sidebar_expanded: Option<bool>,

    /// How conversations map onto message logs.
    #[serde(default)]
    pub thread_mode: Option<ThreadMode>,

    /// JSON file supplying the directory and initial thread.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Capture mouse events (clicks, wheel).
    #[serde(default)]
    pub mouse: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Start with the directory panel expanded.
    pub sidebar_expanded: bool,
    /// How conversations map onto message logs.
    pub thread_mode: ThreadMode,
    /// `None` means the built-in sample data.
    pub data_file: Option<PathBuf>,
    /// Capture mouse events.
    pub mouse: bool,
    /// File that receives tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            sidebar_expanded: true,
            thread_mode: ThreadMode::Shared,
            data_file: None,
            mouse: true,
            log_file_path: default_log_path(),
        }
    }
}

/// Overrides collected from command-line flags.
///
/// Only flags the user actually passed are `Some`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `Some(false)` from `--collapsed`.
    pub sidebar_expanded: Option<bool>,
    /// From `--thread-mode`.
    pub thread_mode: Option<ThreadMode>,
    /// From `--data`.
    pub data_file: Option<PathBuf>,
    /// `Some(false)` from `--no-mouse`.
    pub mouse: Option<bool>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/chatdeck/chatdeck.log` on Linux, or the
/// platform's state/data directory elsewhere. Falls back to the current
/// directory when no such directory can be determined.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("chatdeck").join("chatdeck.log"))
        .unwrap_or_else(|| PathBuf::from("chatdeck.log"))
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
/// Returns `~/.config/chatdeck/config.toml` on Linux, appropriate path on
/// other platforms, `None` if no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chatdeck").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CHATDECK_CONFIG` environment variable
/// 3. Default path `~/.config/chatdeck/config.toml`
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

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        sidebar_expanded: config.sidebar_expanded.unwrap_or(defaults.sidebar_expanded),
        thread_mode: config.thread_mode.unwrap_or(defaults.thread_mode),
        data_file: config.data_file.or(defaults.data_file),
        mouse: config.mouse.unwrap_or(defaults.mouse),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CHATDECK_DATA`: data file path
/// - `CHATDECK_THREAD_MODE`: `shared` or `per-conversation`; unknown values
///   are logged and ignored
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(data) = std::env::var(DATA_ENV_VAR) {
        if !data.is_empty() {
            config.data_file = Some(PathBuf::from(data));
        }
    }

    if let Ok(mode) = std::env::var(THREAD_MODE_ENV_VAR) {
        match mode.parse::<ThreadMode>() {
            Ok(mode) => config.thread_mode = mode,
            Err(reason) => tracing::warn!(%reason, "Ignoring {THREAD_MODE_ENV_VAR}"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(expanded) = cli.sidebar_expanded {
        config.sidebar_expanded = expanded;
    }

    if let Some(mode) = cli.thread_mode {
        config.thread_mode = mode;
    }

    if let Some(path) = cli.data_file {
        config.data_file = Some(path);
    }

    if let Some(mouse) = cli.mouse {
        config.mouse = mouse;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
