//! Domain models for the notebook converter
//!
//! Contains the markdown parser, block model and notebook serializer
//! without any I/O concerns.

mod language;
mod block;
mod dialect;
mod markdown;
mod notebook;

use thiserror::Error;

pub use language::Language;
pub use block::{Block, Line};
pub use dialect::{Dialect, CLOSING_FENCE};
pub use markdown::ParsedDocument;
pub use notebook::{to_notebook_source, NOTEBOOK_SOURCE_MARKER};

/// Errors raised while selecting conversion tables
#[derive(Debug, Error, PartialEq)]
pub enum ConversionError {
    #[error("Unsupported markdown file extension: '{0}' (expected .md or .rmd)")]
    UnknownDialect(String),

    #[error("Unknown language: '{0}'")]
    UnknownLanguage(String),
}
