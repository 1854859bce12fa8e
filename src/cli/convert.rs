//! Local markdown to notebook conversion

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::output::Output;
use super::upload::resolve_language;
use crate::domain::{to_notebook_source, Language};
use crate::storage::{MarkdownSource, Settings};
use crate::workspace::WorkspaceLanguage;

/// Converts `from_path` and prints or writes the notebook source
pub fn run(
    output: &Output,
    settings: &Settings,
    from_path: &Path,
    base_language: Option<WorkspaceLanguage>,
    starting_language: Language,
    output_path: Option<PathBuf>,
) -> Result<()> {
    let source = MarkdownSource::new(from_path)?;
    let language = resolve_language(base_language, from_path, settings.default_language);

    output.verbose_ctx(
        "convert",
        &format!(
            "Parsing {} as {} (host language {})",
            from_path.display(),
            source.dialect(),
            language
        ),
    );

    let document = source.parse(starting_language)?;
    output.verbose_ctx("convert", &format!("Parsed {} blocks", document.block_count()));

    let notebook = to_notebook_source(&document, language.host_language());

    match output_path {
        Some(path) => {
            fs::write(&path, &notebook)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            if output.is_json() {
                output.data(&serde_json::json!({
                    "converted": true,
                    "from": from_path.display().to_string(),
                    "to": path.display().to_string(),
                    "language": language,
                    "blocks": document.block_count(),
                }));
            } else {
                output.success(&format!("Converted {} to {}", from_path.display(), path.display()));
            }
        }
        None if output.is_json() => {
            output.data(&serde_json::json!({
                "from": from_path.display().to_string(),
                "language": language,
                "blocks": document.blocks,
                "source": notebook,
            }));
        }
        None => output.raw(&notebook),
    }

    Ok(())
}
