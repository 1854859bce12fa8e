//! Configuration handling
//!
//! Settings come from an optional `config.toml` in the user config
//! directory (e.g. `~/.config/databrickstools/config.toml`), then
//! `DATABRICKSTOOLS_*` environment variables override individual fields.
//! `DATABRICKSTOOLS_CONFIG` points at an alternative settings file.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::workspace::{ExportFormat, WorkspaceLanguage};

pub const ENV_CONFIG: &str = "DATABRICKSTOOLS_CONFIG";
pub const ENV_URL: &str = "DATABRICKSTOOLS_DATABRICKS_URL";
pub const ENV_TOKEN: &str = "DATABRICKSTOOLS_DATABRICKS_TOKEN";
pub const ENV_DEFAULT_LANGUAGE: &str = "DATABRICKSTOOLS_DEFAULT_LANGUAGE";
pub const ENV_DEFAULT_FORMAT: &str = "DATABRICKSTOOLS_DEFAULT_FORMAT";
pub const ENV_LOG_LEVEL: &str = "DATABRICKSTOOLS_LOG_LEVEL";
pub const ENV_TIMEOUT_SECS: &str = "DATABRICKSTOOLS_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing configuration: set {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Diagnostic verbosity, ordered from most to least chatty
///
/// `DEBUG` turns on verbose diagnostics, `WARNING` and `ERROR` hide the
/// text-mode success messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

/// Workspace URL and access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub url: String,
    pub token: String,
}

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Workspace URL, e.g. `https://<instance>.cloud.databricks.com`
    pub databricks_url: Option<String>,

    /// Personal access token
    pub databricks_token: Option<String>,

    /// Notebook language when it cannot be guessed from the file name
    pub default_language: WorkspaceLanguage,

    /// Format for `download file` when none is given
    pub default_format: ExportFormat,

    pub log_level: LogLevel,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            databricks_url: None,
            databricks_token: None,
            default_language: WorkspaceLanguage::Python,
            default_format: ExportFormat::Source,
            log_level: LogLevel::Info,
            timeout_secs: 30,
        }
    }
}

fn parse_env<T: FromStr<Err = String>>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|message| ConfigError::Invalid { key, message })
}

impl Settings {
    /// Loads the settings file (if any) and applies environment overrides
    pub fn load() -> Result<Self> {
        let path = std::env::var(ENV_CONFIG)
            .ok()
            .map(PathBuf::from)
            .or_else(Self::default_path);

        let mut settings = match path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        settings.apply_env(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    /// Returns the default settings file location
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "databrickstools", "databrickstools")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Reads settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Overrides fields from environment variables found via `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(url) = lookup(ENV_URL) {
            self.databricks_url = Some(url);
        }
        if let Some(token) = lookup(ENV_TOKEN) {
            self.databricks_token = Some(token);
        }
        if let Some(value) = lookup(ENV_DEFAULT_LANGUAGE) {
            self.default_language = parse_env(ENV_DEFAULT_LANGUAGE, &value)?;
        }
        if let Some(value) = lookup(ENV_DEFAULT_FORMAT) {
            self.default_format = parse_env(ENV_DEFAULT_FORMAT, &value)?;
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            self.log_level = parse_env(ENV_LOG_LEVEL, &value)?;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = value.trim().parse().map_err(|_| ConfigError::Invalid {
                key: ENV_TIMEOUT_SECS,
                message: format!("expected a number of seconds, got '{}'", value),
            })?;
        }
        Ok(())
    }

    /// Returns the workspace credentials, or which one is missing
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let url = self
            .databricks_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::Missing(ENV_URL))?;
        let token = self
            .databricks_token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::Missing(ENV_TOKEN))?;

        Ok(Credentials { url, token })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn is_debug(&self) -> bool {
        self.log_level == LogLevel::Debug
    }

    pub fn is_quiet(&self) -> bool {
        self.log_level > LogLevel::Info
    }
}
