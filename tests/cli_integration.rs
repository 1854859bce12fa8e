//! CLI integration tests for databrickstools
//!
//! These tests run the binary end to end for the offline conversion path
//! and for the validation that happens before any workspace call.

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command instance with an isolated, credential-free environment
fn cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("databrickstools"));
    cmd.current_dir(dir)
        .env("DATABRICKSTOOLS_CONFIG", dir.join("no-config.toml"))
        .env_remove("DATABRICKSTOOLS_DATABRICKS_URL")
        .env_remove("DATABRICKSTOOLS_DATABRICKS_TOKEN")
        .env_remove("DATABRICKSTOOLS_DEFAULT_LANGUAGE")
        .env_remove("DATABRICKSTOOLS_DEFAULT_FORMAT")
        .env_remove("DATABRICKSTOOLS_LOG_LEVEL")
        .env_remove("DATABRICKSTOOLS_TIMEOUT_SECS");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).unwrap();
}

// =============================================================================
// Conversion Tests
// =============================================================================

#[test]
fn test_convert_markdown_to_stdout() {
    let dir = TempDir::new().unwrap();
    write(&dir, "notes.md", "intro text\n```py\nx = 1\n```\noutro text\n");

    let expected = "\
# Databricks notebook source
# COMMAND ----------

# MAGIC %md
# MAGIC intro text


# COMMAND ----------

# MAGIC %python
# MAGIC x = 1


# COMMAND ----------

# MAGIC %md
# MAGIC outro text

";

    cmd(dir.path())
        .args(["convert", "notes.md"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_convert_uses_base_language_comment() {
    let dir = TempDir::new().unwrap();
    write(&dir, "notes.md", "```sql\nselect 1\n```\n");

    cmd(dir.path())
        .args(["convert", "notes.md", "--base-language", "SCALA"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("// Databricks notebook source\n"))
        .stdout(predicate::str::contains("// MAGIC %sql\n// MAGIC select 1\n"));
}

#[test]
fn test_convert_rmarkdown_to_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "report.Rmd", "# Report\n```{sql}\nselect *\n```\n");

    cmd(dir.path())
        .args(["convert", "report.Rmd", "--output", "report.sql", "--base-language", "sql"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted"));

    let notebook = fs::read_to_string(dir.path().join("report.sql")).unwrap();
    assert!(notebook.starts_with("-- Databricks notebook source\n"));
    assert!(notebook.contains("-- MAGIC %sql\n-- MAGIC select *\n"));
}

#[test]
fn test_convert_json_reports_blocks() {
    let dir = TempDir::new().unwrap();
    write(&dir, "notes.md", "a\n```sh\nls\n```\n");

    let output = cmd(dir.path())
        .args(["convert", "notes.md", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["language"], "PYTHON");
    assert_eq!(json["blocks"].as_array().unwrap().len(), 2);
    assert_eq!(json["blocks"][1]["language"], "shell");
    assert!(json["source"].as_str().unwrap().contains("# MAGIC %sh\n"));
}

#[test]
fn test_convert_blank_file_is_header_only() {
    let dir = TempDir::new().unwrap();
    write(&dir, "blank.md", "\n   \n");

    cmd(dir.path())
        .args(["convert", "blank.md"])
        .assert()
        .success()
        .stdout("# Databricks notebook source");
}

#[test]
fn test_convert_unknown_extension_fails() {
    let dir = TempDir::new().unwrap();
    write(&dir, "notes.txt", "text\n");

    cmd(dir.path())
        .args(["convert", "notes.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported markdown file extension"));
}

#[test]
fn test_convert_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    cmd(dir.path())
        .args(["convert", "missing.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_remote_command_requires_url() {
    let dir = TempDir::new().unwrap();

    cmd(dir.path())
        .args(["ls", "/Shared"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABRICKSTOOLS_DATABRICKS_URL"));
}

#[test]
fn test_remote_command_requires_token() {
    let dir = TempDir::new().unwrap();

    cmd(dir.path())
        .env("DATABRICKSTOOLS_DATABRICKS_URL", "http://127.0.0.1:9")
        .args(["mkdir", "/Shared/x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABRICKSTOOLS_DATABRICKS_TOKEN"));
}

#[test]
fn test_invalid_env_value_fails() {
    let dir = TempDir::new().unwrap();
    write(&dir, "notes.md", "text\n");

    cmd(dir.path())
        .env("DATABRICKSTOOLS_DEFAULT_LANGUAGE", "ruby")
        .args(["convert", "notes.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABRICKSTOOLS_DEFAULT_LANGUAGE"));
}

#[test]
fn test_settings_file_default_language() {
    let dir = TempDir::new().unwrap();
    write(&dir, "settings.toml", "default_language = \"SCALA\"\n");
    write(&dir, "notes.md", "text\n");

    cmd(dir.path())
        .env("DATABRICKSTOOLS_CONFIG", dir.path().join("settings.toml"))
        .args(["convert", "notes.md"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("// Databricks notebook source"));
}

#[test]
fn test_warning_log_level_hides_success_message() {
    let dir = TempDir::new().unwrap();
    write(&dir, "notes.md", "text\n");

    cmd(dir.path())
        .env("DATABRICKSTOOLS_LOG_LEVEL", "WARNING")
        .args(["convert", "notes.md", "--output", "notes.py"])
        .assert()
        .success()
        .stdout("");

    assert!(dir.path().join("notes.py").exists());
}

// =============================================================================
// Pre-network Validation Tests
// =============================================================================

#[test]
fn test_upload_markdown_rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    write(&dir, "notes.txt", "text\n");

    cmd(dir.path())
        .args(["upload", "markdown", "notes.txt", "/Shared/notes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported markdown file extension"));
}

#[test]
fn test_download_html_checks_extension() {
    let dir = TempDir::new().unwrap();

    cmd(dir.path())
        .args(["download", "html", "/Shared/nb", "nb.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must end with .html"));

    assert!(!dir.path().join("nb.txt").exists());
}

#[test]
fn test_download_source_checks_extension() {
    let dir = TempDir::new().unwrap();

    cmd(dir.path())
        .args(["download", "source", "/Shared/nb", "nb.scala"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must end with .py or .sc"));
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();

    cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("upload"))
        .stdout(predicate::str::contains("download"))
        .stdout(predicate::str::contains("convert"));
}
