//! # Workspace API
//!
//! Remote workspace operations used by the CLI.
//!
//! | Operation | Endpoint | Method |
//! |-----------|----------|--------|
//! | Import | `2.0/workspace/import` | POST |
//! | Export | `2.0/workspace/export` | GET |
//! | List | `2.0/workspace/list` | GET |
//! | Mkdirs | `2.0/workspace/mkdirs` | POST |
//!
//! All calls authenticate with a bearer token. Any non-success status is
//! reported as [`WorkspaceError::Rejected`] with the raw response body.

mod client;
mod protocol;

use thiserror::Error;

pub use client::{api_base, WorkspaceClient};
pub use protocol::{
    ExportFormat, ExportResponse, ImportPayload, ImportRequest, ListResponse, ObjectInfo,
    PathPayload, WorkspaceLanguage,
};

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Workspace rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Failed to decode exported content: {0}")]
    Decode(String),

    #[error("Invalid workspace URL: {0}")]
    InvalidUrl(String),
}

/// Operations the CLI needs from a remote workspace
pub trait WorkspaceApi {
    /// Imports notebook source at `request.path`
    fn import(&self, request: &ImportRequest) -> Result<(), WorkspaceError>;

    /// Exports the object at `path` and returns its decoded content
    fn export(&self, path: &str, format: ExportFormat) -> Result<String, WorkspaceError>;

    /// Lists the objects directly under `path`
    fn list(&self, path: &str) -> Result<Vec<ObjectInfo>, WorkspaceError>;

    /// Creates `path` and any missing parents
    fn mkdirs(&self, path: &str) -> Result<(), WorkspaceError>;
}
