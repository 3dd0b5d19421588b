//! CLI integration tests for conversors
//!
//! Tests the binary as a user would interact with it. Remote commands point
//! at a closed local port so no test ever reaches a real backend.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const UNREACHABLE_BACKEND: &str = "http://127.0.0.1:9";

/// Runs in an empty directory with a fixed backend so local config files
/// and the caller's environment do not leak in.
fn conversors(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("conversors").unwrap();
    cmd.current_dir(dir.path())
        .env("CONVERSORS_API_BASE_URL", UNREACHABLE_BACKEND)
        .env("CONVERSORS_API_KEY", "test-key")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn workdir() -> TempDir {
    tempfile::tempdir().unwrap()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    let dir = workdir();
    conversors(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Content conversion suite"))
        .stdout(predicate::str::contains("json-to-sql"))
        .stdout(predicate::str::contains("transcribe"));
}

#[test]
fn test_clipboard_holder_is_hidden() {
    let dir = workdir();
    conversors(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipboard-hold").not());
}

#[test]
fn test_version() {
    let dir = workdir();
    conversors(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("conversors"));
}

#[test]
fn test_missing_subcommand_fails() {
    let dir = workdir();
    conversors(&dir).assert().failure();
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_list_dialects() {
    let dir = workdir();
    conversors(&dir)
        .args(["config", "list", "dialects"])
        .assert()
        .success()
        .stdout("MySQL,PostgreSQL,SQLite,SQLServer,Oracle,MariaDB\n");
}

#[test]
fn test_config_list_json() {
    let dir = workdir();
    let output = conversors(&dir)
        .args(["config", "list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["features"].as_array().unwrap().len(), 8);
    assert_eq!(value["languages"][0], "English");
}

#[test]
fn test_config_list_human_readable() {
    let dir = workdir();
    conversors(&dir)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("POST /text-to-conceptual-table"))
        .stdout(predicate::str::contains("Languages: English, Spanish"));
}

#[test]
fn test_config_show_uses_env_and_hides_key() {
    let dir = workdir();
    conversors(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(UNREACHABLE_BACKEND))
        .stdout(predicate::str::contains("api.api_key      = (set)"))
        .stdout(predicate::str::contains("test-key").not());
}

#[test]
fn test_config_show_flag_beats_env() {
    let dir = workdir();
    conversors(&dir)
        .args(["--api-base", "https://api.example.com", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://api.example.com"));
}

#[test]
fn test_project_config_file_is_read() {
    let dir = workdir();
    std::fs::write(
        dir.path().join("conversors.toml"),
        "[api]\ntimeout_secs = 7\n",
    )
    .unwrap();
    conversors(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api.timeout_secs = 7"));
}

// ============================================================================
// Local Conversions
// ============================================================================

#[test]
fn test_json_formats_with_two_spaces() {
    let dir = workdir();
    conversors(&dir)
        .args(["json", r#"{"a":1,"b":[true]}"#])
        .assert()
        .success()
        .stdout("{\n  \"a\": 1,\n  \"b\": [\n    true\n  ]\n}\n");
}

#[test]
fn test_json_from_stdin() {
    let dir = workdir();
    conversors(&dir)
        .arg("json")
        .write_stdin("[1,2]")
        .assert()
        .success()
        .stdout("[\n  1,\n  2\n]\n");
}

#[test]
fn test_json_from_file() {
    let dir = workdir();
    std::fs::write(dir.path().join("input.json"), r#"{"k":"v"}"#).unwrap();
    conversors(&dir)
        .args(["json", "input.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"k\": \"v\""));
}

#[test]
fn test_invalid_json_reports_parser_error() {
    let dir = workdir();
    conversors(&dir)
        .args(["json", "{not json"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error: Invalid JSON:"));
}

#[test]
fn test_empty_json_is_rejected() {
    let dir = workdir();
    conversors(&dir)
        .args(["json", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error: json_input: JSON input is required.",
        ));
}

#[test]
fn test_markdown_renders_html() {
    let dir = workdir();
    conversors(&dir)
        .args(["markdown", "# Title\n\nSome **bold** text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Title</h1>"))
        .stdout(predicate::str::contains("<strong>bold</strong>"));
}

#[test]
fn test_markdown_escapes_raw_html() {
    let dir = workdir();
    conversors(&dir)
        .args(["markdown", "<script>alert(1)</script>"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<script>").not());
}

#[test]
fn test_markdown_plain_text() {
    let dir = workdir();
    conversors(&dir)
        .args(["markdown", "--text", "# Title\n\n- one\n- two"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- one"))
        .stdout(predicate::str::contains("<h1>").not());
}

#[test]
fn test_markdown_pdf_export() {
    let dir = workdir();
    let path = dir.path().join("out.pdf");
    conversors(&dir)
        .args(["markdown", "--pdf", "-o"])
        .arg(&path)
        .arg("# Report\n\nBody")
        .assert()
        .success()
        .stderr(predicate::str::contains("PDF written to"));

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_markdown_pdf_default_filename() {
    let dir = workdir();
    conversors(&dir)
        .args(["-q", "markdown", "--pdf", "Body"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert!(dir.path().join("formatted-text.pdf").exists());
}

#[test]
fn test_json_keeps_key_order() {
    let dir = workdir();
    conversors(&dir)
        .args(["json", r#"{"b":1,"a":2}"#])
        .assert()
        .success()
        .stdout("{\n  \"b\": 1,\n  \"a\": 2\n}\n");
}

// ============================================================================
// Clipboard
// ============================================================================

#[cfg(target_os = "linux")]
#[test]
fn test_copy_without_display_warns_but_succeeds() {
    let dir = workdir();
    conversors(&dir)
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .args(["--copy", "json", "[1]"])
        .assert()
        .success()
        .stdout("[\n  1\n]\n")
        .stderr(predicate::str::contains("warning: clipboard unavailable"))
        .stderr(predicate::str::contains("copied to clipboard").not());
}

#[test]
fn test_copy_of_failed_conversion_is_not_attempted() {
    let dir = workdir();
    conversors(&dir)
        .args(["--copy", "json", "{"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("clipboard").not());
}

// ============================================================================
// Input Limits
// ============================================================================

#[test]
fn test_max_size_rejects_large_input() {
    let dir = workdir();
    conversors(&dir)
        .args(["--max-size", "4", "json", r#"{"a":1}"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds limit"))
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_force_allows_large_input() {
    let dir = workdir();
    conversors(&dir)
        .args(["--max-size", "4", "--force", "json", r#"{"a":1}"#])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: Processing large input"));
}

// ============================================================================
// Remote Conversions
// ============================================================================

#[test]
fn test_unknown_dialect_is_rejected_before_sending() {
    let dir = workdir();
    conversors(&dir)
        .args(["json-to-sql", "--dbms", "DB2", "{}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sql_dbms: Invalid enum value."))
        .stderr(predicate::str::contains("received 'DB2'"));
}

#[test]
fn test_missing_context_is_rejected() {
    let dir = workdir();
    conversors(&dir)
        .args(["table", "--context", "", "Alice is 30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("context: Context is required."));
}

#[test]
fn test_unknown_language_is_rejected() {
    let dir = workdir();
    conversors(&dir)
        .args(["translate", "--from", "Klingon", "Hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("source_language: Invalid enum value."));
}

#[test]
fn test_invalid_image_url_is_rejected() {
    let dir = workdir();
    conversors(&dir)
        .args(["transcribe", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "img_url: A valid image URL is required.",
        ));
}

#[test]
fn test_backend_failure_shows_feature_message() {
    let dir = workdir();
    conversors(&dir)
        .args(["xml-to-sql", "--dbms", "SQLite", "<a>1</a>"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "error: Error generating SQL. Please try again.",
        ));
}

#[test]
fn test_translate_failure_message() {
    let dir = workdir();
    conversors(&dir)
        .args(["translate", "--swap", "--from", "French", "--to", "German", "Bonjour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error translating text. Please try again.",
        ));
}

#[test]
fn test_invalid_base_url() {
    let dir = workdir();
    conversors(&dir)
        .args(["--api-base", "not a url", "math", "x^2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid API base URL"));
}

#[test]
fn test_local_commands_ignore_bad_base_url() {
    let dir = workdir();
    conversors(&dir)
        .args(["--api-base", "not a url", "json", "1"])
        .assert()
        .success()
        .stdout("1\n");
}
