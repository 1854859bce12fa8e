//! Notebook source serializer
//!
//! Renders a [`ParsedDocument`] into the comment-escaped text format the
//! workspace import endpoint accepts with `format=SOURCE`:
//!
//! ```text
//! # Databricks notebook source
//! # COMMAND ----------
//!
//! # MAGIC %md
//! # MAGIC Some prose
//!
//! ```
//!
//! The host language only picks the comment prefix; each cell keeps its
//! own `%<lang>` directive.

use super::{Language, ParsedDocument};

/// Header line marker that identifies notebook source files
pub const NOTEBOOK_SOURCE_MARKER: &str = "Databricks notebook source";

/// Serializes `document` for a notebook whose default language is `host`
pub fn to_notebook_source(document: &ParsedDocument, host: Language) -> String {
    let comment = host.comment_prefix();

    std::iter::once(format!("{} {}", comment, NOTEBOOK_SOURCE_MARKER))
        .chain(document.blocks.iter().map(|block| block.render(comment)))
        .collect::<Vec<_>>()
        .join("\n")
}
