//! Download (export) commands

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use super::output::Output;
use crate::workspace::{ExportFormat, WorkspaceApi};

#[derive(Args, Debug, Clone)]
pub struct DownloadArgs {
    /// Workspace path of the notebook
    pub from_path: String,

    /// Local file to write
    pub to_path: PathBuf,
}

#[derive(Subcommand)]
pub enum DownloadCommands {
    /// Export a notebook in the given format
    File {
        #[command(flatten)]
        args: DownloadArgs,

        /// Export format (defaults to DATABRICKSTOOLS_DEFAULT_FORMAT)
        #[arg(long, value_enum, ignore_case = true)]
        file_format: Option<ExportFormat>,
    },

    /// Export a notebook as source (.py or .sc)
    Source(DownloadArgs),

    /// Export a notebook as HTML (.html)
    Html(DownloadArgs),

    /// Export a notebook as a Jupyter notebook (.ipynb)
    Ipynb(DownloadArgs),
}

/// Export format plus the file endings the target must use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportTarget {
    pub format: ExportFormat,
    pub extensions: &'static [&'static str],
}

impl ExportTarget {
    pub const SOURCE: ExportTarget = ExportTarget {
        format: ExportFormat::Source,
        extensions: &[".py", ".sc"],
    };

    pub const HTML: ExportTarget = ExportTarget {
        format: ExportFormat::Html,
        extensions: &[".html"],
    };

    pub const IPYNB: ExportTarget = ExportTarget {
        format: ExportFormat::Jupyter,
        extensions: &[".ipynb"],
    };

    /// Any file name is accepted
    pub fn any(format: ExportFormat) -> Self {
        Self {
            format,
            extensions: &[],
        }
    }

    /// Fails if `to_path` does not end with an accepted extension
    pub fn check(&self, to_path: &Path) -> Result<()> {
        if self.extensions.is_empty() {
            return Ok(());
        }

        let name = to_path.to_string_lossy();
        if self.extensions.iter().any(|ext| name.ends_with(ext)) {
            Ok(())
        } else {
            anyhow::bail!(
                "The target path {} must end with {}",
                to_path.display(),
                self.extensions.join(" or ")
            )
        }
    }
}

/// Resolves a command to its target and arguments
pub fn split(cmd: DownloadCommands, default_format: ExportFormat) -> (ExportTarget, DownloadArgs) {
    match cmd {
        DownloadCommands::File { args, file_format } => {
            (ExportTarget::any(file_format.unwrap_or(default_format)), args)
        }
        DownloadCommands::Source(args) => (ExportTarget::SOURCE, args),
        DownloadCommands::Html(args) => (ExportTarget::HTML, args),
        DownloadCommands::Ipynb(args) => (ExportTarget::IPYNB, args),
    }
}

/// Exports `args.from_path` and writes it to `args.to_path`
pub fn export_file(
    api: &impl WorkspaceApi,
    output: &Output,
    target: ExportTarget,
    args: &DownloadArgs,
) -> Result<()> {
    target.check(&args.to_path)?;

    output.verbose_ctx(
        "download",
        &format!("Exporting {} as {}", args.from_path, target.format),
    );

    let content = api
        .export(&args.from_path, target.format)
        .with_context(|| format!("Exporting {} failed", args.from_path))?;

    fs::write(&args.to_path, &content)
        .with_context(|| format!("Failed to write {}", args.to_path.display()))?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "exported": true,
            "from": args.from_path,
            "to": args.to_path.display().to_string(),
            "format": target.format,
            "bytes": content.len(),
        }));
    } else {
        output.success(&format!("Exported {} to {}", args.from_path, args.to_path.display()));
    }

    Ok(())
}
