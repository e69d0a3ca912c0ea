//! CLI integration tests for rtdist
//!
//! Tests command parsing, output formatting, and config handling.

use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

/// Helper to run the CLI with arguments
fn run_rtdist(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_rtdist"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// ==================== Help & Version Tests ====================

#[test]
fn test_cli_help() {
    let output = run_rtdist(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("rtdist"));
    assert!(stdout.contains("ticks"));
    assert!(stdout.contains("classify"));
    assert!(stdout.contains("config"));
}

#[test]
fn test_cli_version() {
    let output = run_rtdist(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("rtdist"));
}

// ==================== Ticks Command Tests ====================

#[test]
fn test_ticks_text() {
    let output = run_rtdist(&["ticks"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0  Requests having response time <= 500ms"));
    assert!(stdout.contains("1  Requests having response time > 500ms and <= 1,500ms"));
    assert!(stdout.contains("2  Requests having response time > 1,500ms"));
    assert!(stdout.contains("3  Requests in error"));
}

#[test]
fn test_ticks_json() {
    let output = run_rtdist(&["--json", "--satisfied", "100", "--tolerated", "500", "ticks"]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    let ticks = json["ticks"].as_array().unwrap();
    assert_eq!(ticks.len(), 4);
    assert_eq!(ticks[0][0], 0);
    assert_eq!(ticks[0][1], "Requests having \nresponse time <= 100ms");
    assert_eq!(ticks[3][1], "Requests in error");
}

#[test]
fn test_ticks_french() {
    let output = run_rtdist(&["--json", "--locale", "fr", "ticks"]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["ticks"][3][1], "Requêtes en erreur");
}

// ==================== Classify Command Tests ====================

#[test]
fn test_classify_scenarios() {
    let cases: [(&[&str], i64, &str); 4] = [
        (&["--elapsed", "50"], 0, "satisfied"),
        (&["--elapsed", "300"], 1, "tolerated"),
        (&["--elapsed", "900"], 2, "untolerated"),
        (&["--elapsed", "10", "--failed"], 3, "failed"),
    ];
    for (extra, index, bucket) in cases {
        let mut args = vec!["--json", "--satisfied", "100", "--tolerated", "500", "classify"];
        args.extend_from_slice(extra);
        let output = run_rtdist(&args);
        assert!(output.status.success());
        let json = stdout_json(&output);
        assert_eq!(json["index"], index);
        assert_eq!(json["bucket"], bucket);
    }
}

#[test]
fn test_classify_inverted_thresholds() {
    let output = run_rtdist(&[
        "--json",
        "--satisfied",
        "500",
        "--tolerated",
        "100",
        "classify",
        "--elapsed",
        "300",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["bucket"], "satisfied");
}

#[test]
fn test_classify_requires_elapsed() {
    let output = run_rtdist(&["classify"]);
    assert!(!output.status.success());
}

// ==================== Config Tests ====================

#[test]
fn test_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"satisfied_threshold = 250\ntolerated_threshold = 750\n")
        .unwrap();
    let path = file.path().to_str().unwrap();

    let output = run_rtdist(&["--json", "--config", path, "config", "--show"]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["satisfied_threshold"], 250);
    assert_eq!(json["tolerated_threshold"], 750);
    assert_eq!(json["locale"], "en");
}

#[test]
fn test_unknown_locale_fails() {
    let output = run_rtdist(&["--json", "--locale", "xx", "ticks"]);
    assert!(!output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("unknown locale"));
}

#[test]
fn test_missing_config_file_fails() {
    let output = run_rtdist(&["--config", "/nonexistent/rtdist.toml", "ticks"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config error"));
}
