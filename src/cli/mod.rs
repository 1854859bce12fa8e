//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Upload | Import into the workspace | `upload source`, `upload markdown` |
//! | Download | Export from the workspace | `download file`, `download html` |
//! | Directory | Workspace browsing | `ls`, `mkdir` |
//! | Local | Offline conversion | `convert` |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`), or `DATABRICKSTOOLS_LOG_LEVEL=DEBUG`:
//! ```bash
//! databrickstools --verbose upload markdown notes.md /Shared/notes
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod upload;
mod download;
mod directory;
mod convert;

#[cfg(test)]
mod testing;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
pub use upload::{ImportMethod, UploadArgs, UploadCommands};
pub use download::{DownloadArgs, DownloadCommands, ExportTarget};
