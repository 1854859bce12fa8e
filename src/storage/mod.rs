//! # Storage Layer
//!
//! Local files and configuration.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Markdown sources | `.md` / `.rmd` | anywhere, passed on the command line |
//! | Settings | TOML | `<config dir>/databrickstools/config.toml` |
//! | Overrides | Environment | `DATABRICKSTOOLS_*` |
//!
//! ## Key Types
//!
//! - [`MarkdownSource`] - A markdown file with its dialect, parsed on demand
//! - [`Settings`] - User settings and workspace credentials

mod markdown;
mod config;

pub use markdown::{read_markdown, MarkdownSource, SourceError};
pub use config::{ConfigError, Credentials, LogLevel, Settings};
pub use config::{
    ENV_CONFIG, ENV_DEFAULT_FORMAT, ENV_DEFAULT_LANGUAGE, ENV_LOG_LEVEL, ENV_TIMEOUT_SECS,
    ENV_TOKEN, ENV_URL,
};
