//! databrickstools - Manage Databricks workspace resources from the command line
//!
//! Besides thin wrappers around the workspace import, export, list and
//! mkdirs endpoints, the crate converts markdown and R-markdown documents
//! into notebook source: fenced code regions become language cells and
//! prose becomes `%md` cells.

pub mod domain;
pub mod storage;
pub mod workspace;
pub mod cli;

pub use domain::{to_notebook_source, Block, ConversionError, Dialect, Language, Line, ParsedDocument};
