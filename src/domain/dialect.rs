//! Markdown dialects and their fence-opening tables
//!
//! Plain markdown opens code regions with a bare fence (```` ```py ````),
//! R-markdown with a brace-qualified one (```` ```{py ````). Tables are
//! scanned in declaration order and the first matching prefix wins.

use std::fmt;
use std::path::Path;

use super::{ConversionError, Language};

const MARKDOWN_FENCES: &[(&str, Language)] = &[
    ("```scala", Language::Scala),
    ("```tut", Language::Scala),
    ("```py", Language::Python),
    ("```sh", Language::Shell),
    ("```sql", Language::Sql),
];

const R_MARKDOWN_FENCES: &[(&str, Language)] = &[
    ("```tut", Language::Scala),
    ("```{py", Language::Python),
    ("```{sh", Language::Shell),
    ("```{bash", Language::Shell),
    ("```{sql", Language::Sql),
];

/// Bare fence that closes a code region
pub const CLOSING_FENCE: &str = "```";

/// Fence convention selected by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Markdown,
    RMarkdown,
}

impl Dialect {
    /// Selects the dialect from a file extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Result<Self, ConversionError> {
        match ext.to_lowercase().as_str() {
            "md" => Ok(Dialect::Markdown),
            "rmd" => Ok(Dialect::RMarkdown),
            _ => Err(ConversionError::UnknownDialect(ext.to_string())),
        }
    }

    /// Selects the dialect from a path's extension
    pub fn from_path(path: &Path) -> Result<Self, ConversionError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ConversionError::UnknownDialect(path.display().to_string()))?;

        Self::from_extension(ext)
    }

    pub fn fences(&self) -> &'static [(&'static str, Language)] {
        match self {
            Dialect::Markdown => MARKDOWN_FENCES,
            Dialect::RMarkdown => R_MARKDOWN_FENCES,
        }
    }

    /// Returns the language opened by `line`, if it is a fence opener
    pub fn opening_fence(&self, line: &str) -> Option<Language> {
        self.fences()
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix))
            .map(|(_, language)| *language)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Markdown => write!(f, "md"),
            Dialect::RMarkdown => write!(f, "rmd"),
        }
    }
}
