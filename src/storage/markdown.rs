//! Markdown source files
//!
//! Reads a `.md` or `.rmd` file from disk and parses it into blocks. The
//! dialect is checked before the file is opened, so an unsupported
//! extension never touches the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{to_notebook_source, ConversionError, Dialect, Language, ParsedDocument};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A markdown file on disk with its resolved dialect
#[derive(Debug, Clone)]
pub struct MarkdownSource {
    path: PathBuf,
    dialect: Dialect,
}

impl MarkdownSource {
    /// Resolves the dialect for `path` without reading it
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, SourceError> {
        let path = path.into();
        let dialect = Dialect::from_path(&path)?;
        Ok(Self { path, dialect })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Reads the whole file, normalizing `\r\n` and lone `\r` line endings
    fn read(&self) -> Result<String, SourceError> {
        let content = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        Ok(content.replace("\r\n", "\n").replace('\r', "\n"))
    }

    /// Parses the file into a document
    pub fn parse(&self, starting: Language) -> Result<ParsedDocument, SourceError> {
        let content = self.read()?;
        Ok(ParsedDocument::parse(&content, self.dialect, starting))
    }

    /// Parses the file and renders notebook source for `host`
    pub fn to_notebook_source(&self, starting: Language, host: Language) -> Result<String, SourceError> {
        let document = self.parse(starting)?;
        Ok(to_notebook_source(&document, host))
    }
}

/// Reads and parses a markdown file
pub fn read_markdown(path: &Path, starting: Language) -> Result<ParsedDocument, SourceError> {
    MarkdownSource::new(path)?.parse(starting)
}
