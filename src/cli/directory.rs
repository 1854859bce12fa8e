//! Workspace directory commands

use anyhow::{Context, Result};

use super::output::Output;
use crate::workspace::WorkspaceApi;

/// Lists the objects under `path`
pub fn list(api: &impl WorkspaceApi, output: &Output, path: &str) -> Result<()> {
    output.verbose_ctx("ls", &format!("Listing {}", path));

    let objects = api
        .list(path)
        .with_context(|| format!("List operation on {} failed", path))?;

    output.verbose_ctx("ls", &format!("Found {} objects", objects.len()));
    output.data(&objects);
    Ok(())
}

/// Creates `path` and missing parents
pub fn mkdir(api: &impl WorkspaceApi, output: &Output, path: &str) -> Result<()> {
    api.mkdirs(path)
        .with_context(|| format!("Mkdirs operation on {} failed", path))?;

    output.success(&format!("Created directory {}", path));
    Ok(())
}
