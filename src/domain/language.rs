//! Language tags for notebook blocks
//!
//! Every block carries a [`Language`]. The tag decides two things when a
//! notebook is rendered: the `%<magic>` directive of the block and, when
//! the language is the notebook's host language, the comment prefix that
//! escapes every serialized line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ConversionError;

/// Closed set of block languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Markdown prose between code fences
    #[default]
    Prose,
    Scala,
    /// Scala code written for the `tut` documentation compiler
    Tut,
    Python,
    Shell,
    Sql,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::Prose,
        Language::Scala,
        Language::Tut,
        Language::Python,
        Language::Shell,
        Language::Sql,
    ];

    /// Line comment prefix used when this is the host language
    pub fn comment_prefix(&self) -> &'static str {
        match self {
            Language::Scala | Language::Tut => "//",
            Language::Python | Language::Shell | Language::Prose => "#",
            Language::Sql => "--",
        }
    }

    /// Directive name emitted after `MAGIC %`
    pub fn magic_tag(&self) -> &'static str {
        match self {
            Language::Prose => "md",
            Language::Scala | Language::Tut => "scala",
            Language::Python => "python",
            Language::Shell => "sh",
            Language::Sql => "sql",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Prose => "prose",
            Language::Scala => "scala",
            Language::Tut => "tut",
            Language::Python => "python",
            Language::Shell => "shell",
            Language::Sql => "sql",
        }
    }

    pub fn is_prose(&self) -> bool {
        *self == Language::Prose
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "md" | "markdown" | "prose" => Ok(Language::Prose),
            "scala" => Ok(Language::Scala),
            "tut" => Ok(Language::Tut),
            "py" | "python" => Ok(Language::Python),
            "sh" | "shell" | "bash" => Ok(Language::Shell),
            "sql" => Ok(Language::Sql),
            _ => Err(ConversionError::UnknownLanguage(s.to_string())),
        }
    }
}
