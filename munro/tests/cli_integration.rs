//! Integration tests for the munro CLI

use std::fs;
use std::process::Command;

const SAMPLE: &str = "munrolib/tests/fixtures/munrotab_sample.csv";

fn run_munro(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-q", "-p", "munro", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .env_remove("MUNRO_DATA")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn parse(stdout: &str) -> Vec<serde_json::Value> {
    serde_json::from_str(stdout).expect("Invalid JSON output")
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_munro(&["--help"]);

    assert!(success);
    assert!(stdout.contains("munro"));
    assert!(stdout.contains("--min-height"));
    assert!(stdout.contains("--max-height"));
    assert!(stdout.contains("--category"));
    assert!(stdout.contains("--sort"));
    assert!(stdout.contains("--limit"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_munro(&["--version"]);

    assert!(success);
    assert!(stdout.contains("munro"));
}

#[test]
fn test_json_output_lists_everything() {
    let (stdout, _, success) = run_munro(&["--data", SAMPLE]);

    assert!(success);
    let munros = parse(&stdout);
    assert_eq!(munros.len(), 18);
    assert_eq!(munros[0]["name"], "Ben Chonzie");
    assert_eq!(munros[0]["gridReference"], "NN773308");
    assert_eq!(munros[0]["category"], "MUN");
}

#[test]
fn test_filter_sort_limit() {
    let (stdout, _, success) = run_munro(&[
        "--data",
        SAMPLE,
        "--min-height",
        "1000",
        "--category",
        "MUN",
        "--sort",
        "height:desc",
        "--limit",
        "3",
    ]);

    assert!(success);
    let names: Vec<String> = parse(&stdout)
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Ben Nevis", "Ben More", "Stob Binnein"]);
}

#[test]
fn test_table_output() {
    let (stdout, _, success) = run_munro(&["--data", SAMPLE, "-c", "TOP", "-o", "table"]);

    assert!(success);
    assert!(stdout.contains("Name"));
    assert!(stdout.contains("Height (m)"));
    assert!(stdout.contains("Stob Coire an Lochain"));
    assert!(stdout.contains("Total (6 munros)"));
    assert!(!stdout.contains("Ben Nevis  "));
}

#[test]
fn test_text_output_is_plain() {
    let (stdout, _, success) = run_munro(&[
        "--data",
        SAMPLE,
        "-s",
        "height:desc",
        "-n",
        "1",
        "-o",
        "text",
    ]);

    assert!(success);
    assert!(!stdout.contains('\x1b'));
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("Name"));
    assert!(lines[1].chars().all(|c| c == '-'));
    assert!(lines[2].starts_with("Ben Nevis"));
    assert_eq!(lines.last(), Some(&"Total (1 munro)"));
}

#[test]
fn test_data_from_environment() {
    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "munro", "--", "-n", "1"])
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .env("MUNRO_DATA", SAMPLE)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let munros = parse(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(munros.len(), 1);
}

#[test]
fn test_invalid_range() {
    let (_, stderr, success) =
        run_munro(&["--data", SAMPLE, "--min-height", "1000", "--max-height", "900"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("invalid height range"));
}

#[test]
fn test_missing_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.csv");

    let (_, stderr, success) = run_munro(&["--data", missing.to_str().unwrap()]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("could not load the Munro tables"));
}

#[test]
fn test_skipped_rows_are_logged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.csv");
    let mut content =
        fs::read(std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join(SAMPLE)).unwrap();
    content.extend_from_slice(b"99,,,,,,Bad Row,,,,not-a-height,,,,NN000000,,,,,,,,,,,,,,MUN,\n");
    fs::write(&path, content).unwrap();

    let (stdout, stderr, success) = run_munro(&["--data", path.to_str().unwrap()]);

    assert!(success);
    assert_eq!(parse(&stdout).len(), 18);
    assert!(stderr.contains("skipping malformed row"));
}
