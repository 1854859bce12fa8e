//! Upload (import) commands

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use super::output::Output;
use crate::domain::Language;
use crate::storage::{MarkdownSource, Settings};
use crate::workspace::{ImportRequest, WorkspaceApi, WorkspaceLanguage};

#[derive(Args, Debug, Clone)]
pub struct UploadArgs {
    /// Local file to upload
    pub from_path: PathBuf,

    /// Workspace path of the new notebook
    pub to_path: String,

    /// Replace an existing notebook at the target path
    #[arg(long)]
    pub overwrite: bool,

    /// Notebook language (guessed from the file name when omitted)
    #[arg(long, value_enum, ignore_case = true)]
    pub base_language: Option<WorkspaceLanguage>,
}

#[derive(Subcommand)]
pub enum UploadCommands {
    /// Upload a source file (.py, .scala) as a notebook
    Source(UploadArgs),

    /// Convert a markdown file (.md, .rmd) into a notebook and upload it
    Markdown(UploadArgs),
}

/// How the local file becomes notebook source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMethod {
    /// File content is uploaded as is
    Source,
    /// File is converted from markdown first
    Markdown,
}

impl ImportMethod {
    /// Produces the notebook source for `from_path`
    pub fn notebook_source(&self, from_path: &Path, language: WorkspaceLanguage) -> Result<String> {
        match self {
            ImportMethod::Source => fs::read_to_string(from_path)
                .with_context(|| format!("Failed to read {}", from_path.display())),
            ImportMethod::Markdown => {
                let source = MarkdownSource::new(from_path)?;
                Ok(source.to_notebook_source(Language::Prose, language.host_language())?)
            }
        }
    }
}

/// Picks the notebook language: explicit, then file name, then settings
pub fn resolve_language(
    explicit: Option<WorkspaceLanguage>,
    from_path: &Path,
    fallback: WorkspaceLanguage,
) -> WorkspaceLanguage {
    explicit
        .or_else(|| WorkspaceLanguage::from_file_name(&from_path.to_string_lossy()))
        .unwrap_or(fallback)
}

/// Prepared upload, content already computed
pub fn prepare(method: ImportMethod, args: &UploadArgs, settings: &Settings) -> Result<ImportRequest> {
    let language = resolve_language(args.base_language, &args.from_path, settings.default_language);
    let content = method.notebook_source(&args.from_path, language)?;

    Ok(ImportRequest {
        content,
        path: args.to_path.clone(),
        language,
        overwrite: args.overwrite,
    })
}

/// Splits a command into its method and arguments
pub fn split(cmd: UploadCommands) -> (ImportMethod, UploadArgs) {
    match cmd {
        UploadCommands::Source(args) => (ImportMethod::Source, args),
        UploadCommands::Markdown(args) => (ImportMethod::Markdown, args),
    }
}

/// Sends a prepared upload to the workspace
pub fn import_file(
    api: &impl WorkspaceApi,
    output: &Output,
    from_path: &Path,
    request: &ImportRequest,
) -> Result<()> {
    output.verbose_ctx(
        "upload",
        &format!(
            "Importing {} into {} (language={}, overwrite={})",
            from_path.display(),
            request.path,
            request.language,
            request.overwrite
        ),
    );

    api.import(request)
        .with_context(|| format!("Importing {} failed", from_path.display()))?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "imported": true,
            "from": from_path.display().to_string(),
            "to": request.path,
            "language": request.language,
        }));
    } else {
        output.success(&format!("Imported {} to {}", from_path.display(), request.path));
    }

    Ok(())
}
