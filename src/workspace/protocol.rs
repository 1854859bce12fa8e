//! Workspace API wire types
//!
//! Request and response bodies for the `2.0/workspace/*` endpoints. File
//! content travels base64 encoded in both directions.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::WorkspaceError;
use crate::domain::Language;

/// Notebook default language accepted by the import endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkspaceLanguage {
    #[default]
    Python,
    Scala,
    Sql,
}

impl WorkspaceLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkspaceLanguage::Python => "PYTHON",
            WorkspaceLanguage::Scala => "SCALA",
            WorkspaceLanguage::Sql => "SQL",
        }
    }

    /// Block language whose comment prefix the notebook uses
    pub fn host_language(&self) -> Language {
        match self {
            WorkspaceLanguage::Python => Language::Python,
            WorkspaceLanguage::Scala => Language::Scala,
            WorkspaceLanguage::Sql => Language::Sql,
        }
    }

    /// Guesses the language from a source file name
    pub fn from_file_name(path: &str) -> Option<Self> {
        let lower = path.to_lowercase();
        if lower.ends_with(".py") {
            Some(WorkspaceLanguage::Python)
        } else if lower.ends_with(".scala") || lower.ends_with(".sc") {
            Some(WorkspaceLanguage::Scala)
        } else {
            None
        }
    }
}

impl fmt::Display for WorkspaceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkspaceLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PYTHON" => Ok(WorkspaceLanguage::Python),
            "SCALA" => Ok(WorkspaceLanguage::Scala),
            "SQL" => Ok(WorkspaceLanguage::Sql),
            _ => Err(format!("unknown workspace language '{}'", s)),
        }
    }
}

/// Export format accepted by the export endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportFormat {
    #[default]
    Source,
    Html,
    Jupyter,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Source => "SOURCE",
            ExportFormat::Html => "HTML",
            ExportFormat::Jupyter => "JUPYTER",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SOURCE" => Ok(ExportFormat::Source),
            "HTML" => Ok(ExportFormat::Html),
            "JUPYTER" => Ok(ExportFormat::Jupyter),
            _ => Err(format!("unknown export format '{}'", s)),
        }
    }
}

/// An import of notebook source into the workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    /// Notebook source text (not yet encoded)
    pub content: String,

    /// Target workspace path
    pub path: String,

    pub language: WorkspaceLanguage,

    pub overwrite: bool,
}

/// JSON body of `POST 2.0/workspace/import`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportPayload {
    /// Base64-encoded UTF-8 content
    pub content: String,
    pub format: ExportFormat,
    pub path: String,
    pub language: WorkspaceLanguage,
    pub overwrite: bool,
}

impl From<&ImportRequest> for ImportPayload {
    fn from(request: &ImportRequest) -> Self {
        Self {
            content: STANDARD.encode(request.content.as_bytes()),
            format: ExportFormat::Source,
            path: request.path.clone(),
            language: request.language,
            overwrite: request.overwrite,
        }
    }
}

/// JSON body of `POST 2.0/workspace/mkdirs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathPayload {
    pub path: String,
}

/// Response of `GET 2.0/workspace/export`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    /// Base64-encoded file content
    pub content: String,
}

impl ExportResponse {
    /// Decodes the exported content as UTF-8 text
    pub fn decode(&self) -> Result<String, WorkspaceError> {
        let bytes = STANDARD
            .decode(self.content.trim())
            .map_err(|e| WorkspaceError::Decode(e.to_string()))?;

        String::from_utf8(bytes).map_err(|e| WorkspaceError::Decode(e.to_string()))
    }
}

/// Response of `GET 2.0/workspace/list`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListResponse {
    /// Absent when the directory is empty
    #[serde(default)]
    pub objects: Vec<ObjectInfo>,
}

/// One workspace object (notebook, directory, library, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectInfo {
    pub path: String,

    pub object_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<i64>,

    /// Any fields not modeled above, kept for display
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
