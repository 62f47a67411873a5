//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Binary with config lookup pinned to a throwaway home so tests never
/// touch (or see) the real user preference file.
fn cmd_with_home(home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("code-analyzer"));
    cmd.env("HOME", home.path());
    cmd.env("XDG_CONFIG_HOME", home.path().join(".config"));
    cmd
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = cmd_with_home(&home);
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("code-analyzer"));
}

#[test]
fn test_cli_help_lists_actions() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = cmd_with_home(&home);
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("execute"))
        .stdout(predicate::str::contains("execute-optimized"))
        .stdout(predicate::str::contains("execute-retry"))
        .stdout(predicate::str::contains("tool"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_generate_defaults_to_qwen() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = cmd_with_home(&home);
    cmd.args(["generate", "--scenario", "architecture", "--target", "overview"]);
    cmd.assert().success().stdout(predicate::str::contains(
        "qwen --all-files --yolo -p \"Analyze the overall system architecture. \
         Identify the main components, data flow, service boundaries, integration \
         patterns, and key architectural decisions.\"",
    ));
}

#[test]
fn test_generate_unknown_scenario_falls_back() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = cmd_with_home(&home);
    cmd.args(["generate", "--scenario", "observability"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Analyze this codebase focusing on observability."));
}

#[test]
fn test_generate_appends_context() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = cmd_with_home(&home);
    cmd.args(["generate", "--scenario", "quality", "--target", "security", "--context", "skip tests"]);
    cmd.assert().success().stdout(predicate::str::contains("Context: skip tests\""));
}

#[test]
fn test_tool_preference_persists_and_changes_generate() {
    let home = TempDir::new().expect("temp home");

    let mut set = cmd_with_home(&home);
    set.args(["tool", "gemini"]);
    set.assert()
        .success()
        .stdout(predicate::str::contains("Successfully set preferred tool to: gemini"));

    let config_path =
        home.path().join(".config").join("code-analyzer").join("code_analyzer_config.json");
    let raw = fs::read_to_string(&config_path).expect("config file written");
    assert!(raw.contains("\"preferred_tool\": \"gemini\""));

    let mut generate = cmd_with_home(&home);
    generate.args(["generate", "--scenario", "architecture", "--target", "overview"]);
    generate
        .assert()
        .success()
        .stdout(predicate::str::contains("geminicli --all-files --yolo -p"));
}

#[test]
fn test_tool_rejects_unknown_name_before_any_io() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = cmd_with_home(&home);
    cmd.args(["tool", "copilot"]);
    cmd.assert().failure().stderr(predicate::str::contains("gemini"));

    let config_path =
        home.path().join(".config").join("code-analyzer").join("code_analyzer_config.json");
    assert!(!config_path.exists(), "rejected tool name must not touch the file system");
}

#[test]
fn test_tool_flag_overrides_stored_preference() {
    let home = TempDir::new().expect("temp home");

    let mut set = cmd_with_home(&home);
    set.args(["tool", "qwen"]);
    set.assert().success();

    let mut generate = cmd_with_home(&home);
    generate.args(["generate", "--scenario", "audit", "--tool", "gemini"]);
    generate
        .assert()
        .success()
        .stdout(predicate::str::contains("geminicli --all-files --yolo -p"));
}

#[test]
fn test_generate_all_tools_prints_comparison() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = cmd_with_home(&home);
    cmd.args(["generate", "--scenario", "audit", "--target", "testing", "--all-tools"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gemini: geminicli --all-files"))
        .stdout(predicate::str::contains("qwen: qwen --all-files"))
        .stdout(predicate::str::contains("configured: "));
}

#[test]
fn test_execute_missing_tool_fails_but_exits_zero() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = cmd_with_home(&home);
    // Minimal PATH: sh resolves, the qwen binary does not.
    cmd.env("PATH", "/usr/bin:/bin");
    cmd.args(["execute", "--scenario", "quality", "--timeout", "30"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Analysis failed!"))
        .stdout(predicate::str::contains("Command: qwen --all-files"));
}

#[test]
fn test_execute_retry_missing_tool_exits_zero() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = cmd_with_home(&home);
    cmd.env("PATH", "/usr/bin:/bin");
    cmd.args(["execute-retry", "--scenario", "quality", "--timeout", "30", "--max-retries", "0"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Analysis failed!"))
        .stdout(predicate::str::contains("Command: unknown"));
}

#[test]
fn test_status_reports_configuration() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = cmd_with_home(&home);
    cmd.arg("status");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Preferred tool: qwen"))
        .stdout(predicate::str::contains("Available tools:"))
        .stdout(predicate::str::contains("Effective tool:"));
}

#[test]
fn test_status_json_is_well_formed() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = cmd_with_home(&home);
    cmd.args(["status", "--json"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let status: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON status");
    assert_eq!(status["preferred_tool"], "qwen");
    assert!(status["available_tools"].is_object());
}

#[test]
fn test_generate_requires_scenario() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = cmd_with_home(&home);
    cmd.arg("generate");
    cmd.assert().failure().stderr(predicate::str::contains("--scenario"));
}
