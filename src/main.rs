//! databrickstools - Databricks workspace CLI

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = databricks_tools::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
