//! Integration tests for the chatshare CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixture_path, load_fixture};

/// chatshare with a config path inside `dir`, so the user's own config is
/// never read.
fn chatshare(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("chatshare").unwrap();
    cmd.arg("--config")
        .arg(dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

fn fixture_arg(name: &str) -> String {
    fixture_path(name).to_string_lossy().into_owned()
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    chatshare(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("detect"));
}

#[test]
fn parse_without_provider_or_url_is_usage_error() {
    let dir = TempDir::new().unwrap();
    chatshare(&dir)
        .args(["parse", &fixture_arg("claude.html")])
        .assert()
        .code(2);
}

// ============================================================================
// Parse Tests
// ============================================================================

#[test]
fn parse_prints_json_messages() {
    let dir = TempDir::new().unwrap();
    let output = chatshare(&dir)
        .args(["parse", &fixture_arg("claude.html"), "--provider", "claude"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let turns = value.as_array().unwrap();
    assert_eq!(turns.len(), 4);
    assert_eq!(turns[0]["role"], "user");
    assert_eq!(turns[0]["text"], "Summarize the attached report");
    assert_eq!(turns[3]["role"], "assistant");
}

#[test]
fn parse_detects_provider_from_url() {
    let dir = TempDir::new().unwrap();
    chatshare(&dir)
        .args([
            "parse",
            &fixture_arg("grok.html"),
            "--url",
            "https://grok.com/share/bGVnYWN5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("What is a monad?"));
}

#[test]
fn parse_markdown_format_renders_transcript() {
    let dir = TempDir::new().unwrap();
    chatshare(&dir)
        .args([
            "parse",
            &fixture_arg("perplexity.html"),
            "-p",
            "perplexity",
            "--format",
            "markdown",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("## 👤 User (Turn 1)"))
        .stdout(predicate::str::contains("**Previous context:**"))
        .stdout(predicate::str::contains("---"));
}

#[test]
fn parse_uses_format_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[output]\nformat = \"markdown\"\n").unwrap();
    chatshare(&dir)
        .args(["parse", &fixture_arg("grok.html"), "-p", "grok"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 🤖 Assistant (Turn 2)"));
}

#[test]
fn parse_applies_configured_noise() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[providers.grok]\nextra_noise = [\"What is a monad?\"]\n",
    )
    .unwrap();
    chatshare(&dir)
        .args(["parse", &fixture_arg("grok.html"), "-p", "grok"])
        .assert()
        .success()
        .stdout(predicate::str::contains("monad?").not());
}

#[test]
fn parse_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("conversation.json");
    chatshare(&dir)
        .args(["parse", &fixture_arg("chatgpt.html"), "-p", "chatgpt", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("borrow checker"));
}

#[test]
fn parse_login_wall_fails_with_hint() {
    let dir = TempDir::new().unwrap();
    chatshare(&dir)
        .args(["parse", &fixture_arg("login_wall.html"), "-p", "chatgpt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No conversation turns"))
        .stderr(predicate::str::contains("Hint:"));
}

#[test]
fn parse_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    chatshare(&dir)
        .args(["parse", "missing.html", "-p", "claude"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn parse_unknown_url_fails() {
    let dir = TempDir::new().unwrap();
    chatshare(&dir)
        .args([
            "parse",
            &fixture_arg("claude.html"),
            "--url",
            "https://example.com/share/1",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not detect provider"));
}

// ============================================================================
// Batch Tests
// ============================================================================

#[test]
fn batch_writes_one_file_per_input() {
    let dir = TempDir::new().unwrap();
    let inputs = dir.path().join("saved");
    std::fs::create_dir_all(&inputs).unwrap();
    std::fs::write(inputs.join("first.html"), load_fixture("chatgpt.html")).unwrap();
    std::fs::write(inputs.join("second.html"), load_fixture("chatgpt_unrendered.html")).unwrap();
    let out_dir = dir.path().join("out");

    chatshare(&dir)
        .arg("batch")
        .arg(inputs.join("first.html"))
        .arg(inputs.join("second.html"))
        .args(["--provider", "chatgpt", "--out-dir"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted 2 of 2 files"));

    assert!(out_dir.join("first.json").exists());
    let second = std::fs::read_to_string(out_dir.join("second.json")).unwrap();
    assert!(second.contains("The capital is Paris, France."));
}

#[test]
fn batch_keeps_outputs_of_inputs_sharing_a_name() {
    let dir = TempDir::new().unwrap();
    for (folder, fixture) in [("a", "chatgpt.html"), ("b", "chatgpt_unrendered.html")] {
        let folder = dir.path().join(folder);
        std::fs::create_dir_all(&folder).unwrap();
        std::fs::write(folder.join("chat.html"), load_fixture(fixture)).unwrap();
    }
    let out_dir = dir.path().join("out");

    chatshare(&dir)
        .arg("batch")
        .arg(dir.path().join("a").join("chat.html"))
        .arg(dir.path().join("b").join("chat.html"))
        .args(["--provider", "chatgpt", "--out-dir"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted 2 of 2 files"));

    let mut names: Vec<String> = std::fs::read_dir(&out_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["chat-1.json", "chat.json"]);

    let first = std::fs::read_to_string(out_dir.join("chat.json")).unwrap();
    let second = std::fs::read_to_string(out_dir.join("chat-1.json")).unwrap();
    assert!(first.contains("borrow checker"));
    assert!(second.contains("The capital is Paris, France."));
}

#[test]
fn batch_reports_failures_and_continues() {
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("out");

    chatshare(&dir)
        .arg("batch")
        .arg(fixture_path("login_wall.html"))
        .arg(fixture_path("claude.html"))
        .args(["--provider", "claude", "--format", "markdown", "--out-dir"])
        .arg(&out_dir)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Extracted 1 of 2 files"))
        .stderr(predicate::str::contains("login_wall.html"));

    assert!(out_dir.join("claude.md").exists());
    assert!(!out_dir.join("login_wall.md").exists());
}

// ============================================================================
// Detect / Providers Tests
// ============================================================================

#[test]
fn detect_prints_provider() {
    let dir = TempDir::new().unwrap();
    chatshare(&dir)
        .args(["detect", "https://gemini.google.com/share/abc123"])
        .assert()
        .success()
        .stdout("gemini\n");
}

#[test]
fn detect_unknown_url_fails() {
    let dir = TempDir::new().unwrap();
    chatshare(&dir)
        .args(["detect", "https://example.com/"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unrecognized share URL"));
}

#[test]
fn providers_lists_all_five() {
    let dir = TempDir::new().unwrap();
    let assert = chatshare(&dir).arg("providers").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    for name in ["chatgpt", "claude", "gemini", "grok", "perplexity"] {
        assert!(stdout.contains(name), "missing {} in {}", name, stdout);
    }
    assert_eq!(stdout.lines().count(), 5);
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_path_honors_override() {
    let dir = TempDir::new().unwrap();
    chatshare(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_init_writes_defaults_once() {
    let dir = TempDir::new().unwrap();
    chatshare(&dir).args(["config", "init"]).assert().success();

    let written = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(written.contains("context_window = 2"));

    chatshare(&dir)
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
    chatshare(&dir)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_prints_toml() {
    let dir = TempDir::new().unwrap();
    chatshare(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[output]"))
        .stdout(predicate::str::contains("format = \"json\""));
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn completions_generate_for_bash() {
    let dir = TempDir::new().unwrap();
    chatshare(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chatshare"));
}
