//! End-to-end tests for the s3path binary
//!
//! Each test runs the built binary with an isolated config directory.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Run s3path with an isolated config directory
fn run_s3path(args: &[&str], config_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_s3path"))
        .args(args)
        .env("S3PATH_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute s3path command")
}

fn run(args: &[&str]) -> Output {
    let config_dir = TempDir::new().unwrap();
    run_s3path(args, config_dir.path())
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!("stdout is not JSON ({e}): {}", stdout(output));
    })
}

#[test]
fn test_inspect_json() {
    let output = run(&["--json", "inspect", "s3://test/nadeko2.tar.gz"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let value = json(&output);
    assert_eq!(value["name"], "nadeko2.tar.gz");
    assert_eq!(value["suffix"], ".gz");
    assert_eq!(value["stem"], "nadeko2.tar");
    assert_eq!(value["suffixes"], serde_json::json!([".tar", ".gz"]));
    assert_eq!(value["bucket"], "test");
    assert!(value.get("query").is_none());
}

#[test]
fn test_inspect_human_table() {
    let output = run(&["--no-color", "inspect", "s3://test/.bashrc"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Stem"));
    assert!(text.contains(".bashrc"));
}

#[test]
fn test_parts() {
    let output = run(&["parts", "s3://test/a/b"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\na\nb\n");

    let output = run(&["--json", "parts", "s3://test/a/b"]);
    assert_eq!(json(&output), serde_json::json!(["", "a", "b"]));
}

#[test]
fn test_with_suffix_preserves_query_and_fragment() {
    let output = run(&["with-suffix", "s3://test/a/b.txt?x=1#f", ".md"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "s3://test/a/b.md?x=1#f");
}

#[test]
fn test_with_suffix_remove() {
    let output = run(&["with-suffix", "s3://test/a/b.txt", ""]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "s3://test/a/b");
}

#[test]
fn test_with_suffix_invalid() {
    let output = run(&["--no-color", "with-suffix", "s3://test/a/b.txt", "txt"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("Invalid suffix"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_with_name() {
    let output = run(&["with-name", "s3://test/a/b.txt?x=1#f", "c.txt"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "s3://test/a/c.txt?x=1#f");
}

#[test]
fn test_with_name_on_root_fails() {
    let output = run(&["--json", "with-name", "s3://test", "c.txt"]);
    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"], "s3://test has an empty name");
}

#[test]
fn test_malformed_uri_is_usage_error() {
    let output = run(&["parts", "not-a-uri"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Malformed URI"));
}

#[test]
fn test_parent_and_ancestors() {
    let output = run(&["parent", "s3://test/a/b/c.txt"]);
    assert_eq!(stdout(&output).trim_end(), "s3://test/a/b");

    let output = run(&["parent", "s3://test"]);
    assert_eq!(stdout(&output).trim_end(), "s3://test");

    let output = run(&["parent", "--all", "s3://test/a/b"]);
    assert_eq!(stdout(&output), "s3://test/a\ns3://test\n");
}

#[test]
fn test_join() {
    let output = run(&["join", "s3://test/a", "b/c", "d.txt"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "s3://test/a/b/c/d.txt");

    let output = run(&["--json", "join", "--literal", "s3://test/a", "b/c"]);
    assert!(output.status.success());
    assert_eq!(json(&output)["parts"], serde_json::json!(["", "a", "b/c"]));
}

#[test]
fn test_relative() {
    let output = run(&["relative", "s3://test/a/b/c.txt", "s3://test/a/"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "b/c.txt");

    let output = run(&["relative", "s3://test/a/b", "s3://other/a"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_quiet_suppresses_output() {
    let output = run(&["--quiet", "parent", "s3://test/a/b"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_config_default_output_json() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.toml"),
        "schema_version = 1\n[defaults]\noutput = \"json\"\n",
    )
    .unwrap();

    let output = run_s3path(&["parts", "s3://test/k"], config_dir.path());
    assert!(output.status.success());
    assert_eq!(json(&output), serde_json::json!(["", "k"]));
}

#[test]
fn test_output_flag_overrides_config_json() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.toml"),
        "schema_version = 1\n[defaults]\noutput = \"json\"\n",
    )
    .unwrap();

    let output = run_s3path(&["--output", "human", "parts", "s3://test/k"], config_dir.path());
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\nk\n");
}

#[test]
fn test_output_flag_selects_json() {
    let output = run(&["--output", "json", "parts", "s3://test/k"]);
    assert!(output.status.success());
    assert_eq!(json(&output), serde_json::json!(["", "k"]));
}

#[test]
fn test_completions_ignore_broken_config() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(config_dir.path().join("config.toml"), "not = [valid toml").unwrap();

    let output = run_s3path(&["completions", "bash"], config_dir.path());
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("s3path"));

    let output = run_s3path(&["parts", "s3://test/k"], config_dir.path());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_config_newer_schema_rejected() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(config_dir.path().join("config.toml"), "schema_version = 99\n").unwrap();

    let output = run_s3path(&["parts", "s3://test/k"], config_dir.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("newer than supported"));
}

#[test]
fn test_completions() {
    let output = run(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("s3path"));
}
