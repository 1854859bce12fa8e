//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{convert, directory, download, upload};
use crate::domain::Language;
use crate::storage::Settings;
use crate::workspace::{WorkspaceClient, WorkspaceLanguage};

#[derive(Parser)]
#[command(name = "databrickstools")]
#[command(author, version, about = "Manage Databricks workspace notebooks from the command line")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import local files into the workspace
    #[command(subcommand)]
    Upload(upload::UploadCommands),

    /// Export notebooks from the workspace
    #[command(subcommand)]
    Download(download::DownloadCommands),

    /// List objects in a workspace directory
    Ls {
        /// Workspace directory
        path: String,
    },

    /// Create a workspace directory (and missing parents)
    Mkdir {
        /// Workspace directory
        path: String,
    },

    /// Convert a markdown file into notebook source locally
    Convert {
        /// Markdown file (.md or .rmd)
        from_path: PathBuf,

        /// Notebook language (defaults to DATABRICKSTOOLS_DEFAULT_LANGUAGE)
        #[arg(long, value_enum, ignore_case = true)]
        base_language: Option<WorkspaceLanguage>,

        /// Language of the text before the first fence
        #[arg(long, default_value = "prose")]
        starting_language: Language,

        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

/// Builds a workspace client from the configured credentials
fn connect(settings: &Settings, output: &Output) -> Result<WorkspaceClient> {
    let credentials = settings.credentials()?;
    let client = WorkspaceClient::new(&credentials.url, credentials.token, settings.timeout())
        .context("Failed to create workspace client")?;

    output.verbose_ctx("workspace", &format!("Using API root {}", client.base_url()));
    Ok(client)
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load()?;
    let output = Output::new(cli.format, cli.verbose || settings.is_debug()).quiet(settings.is_quiet());

    output.verbose("databrickstools starting");

    match cli.command {
        Commands::Upload(cmd) => {
            let (method, args) = upload::split(cmd);
            let request = upload::prepare(method, &args, &settings)?;
            let client = connect(&settings, &output)?;
            upload::import_file(&client, &output, &args.from_path, &request)?
        }

        Commands::Download(cmd) => {
            let (target, args) = download::split(cmd, settings.default_format);
            target.check(&args.to_path)?;
            let client = connect(&settings, &output)?;
            download::export_file(&client, &output, target, &args)?
        }

        Commands::Ls { path } => {
            let client = connect(&settings, &output)?;
            directory::list(&client, &output, &path)?
        }

        Commands::Mkdir { path } => {
            let client = connect(&settings, &output)?;
            directory::mkdir(&client, &output, &path)?
        }

        Commands::Convert {
            from_path,
            base_language,
            starting_language,
            output: output_path,
        } => convert::run(
            &output,
            &settings,
            &from_path,
            base_language,
            starting_language,
            output_path,
        )?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
