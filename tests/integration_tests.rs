//! Integration tests for the vetty CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("vetty").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("decode validation"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("vetty").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vetty"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("vetty").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Scanning a tree of well-formed files exits zero
#[test]
fn test_scan_clean_tree() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.json"), "{\"region\": \"us-east-1\"}").unwrap();
    fs::create_dir(temp_dir.path().join("envs")).unwrap();
    fs::write(temp_dir.path().join("envs/prod.yaml"), "replicas: 3\n").unwrap();

    let mut cmd = Command::cargo_bin("vetty").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 total files"))
        .stdout(predicate::str::contains("All files decoded successfully"));
}

/// A single malformed file makes the whole run exit non-zero
#[test]
fn test_scan_malformed_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("good.yaml"), "ok: true\n").unwrap();
    fs::write(temp_dir.path().join("broken.yaml"), "key: [never closed\n").unwrap();

    let mut cmd = Command::cargo_bin("vetty").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("scan")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Decode errors"));
}

/// Files under an excluded directory name are never visited
#[test]
fn test_scan_honors_excluded_dirs() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join(".terragrunt-cache")).unwrap();
    fs::write(
        temp_dir.path().join(".terragrunt-cache/stale.json"),
        "definitely not json",
    )
    .unwrap();
    fs::write(temp_dir.path().join("live.json"), "{}").unwrap();

    let mut cmd = Command::cargo_bin("vetty").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 total files"));
}

/// --match-patterns narrows the scan
#[test]
fn test_scan_pattern_override() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("fine.json"), "{}").unwrap();
    fs::write(temp_dir.path().join("broken.yaml"), "key: [never closed\n").unwrap();

    let mut cmd = Command::cargo_bin("vetty").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("scan")
        .arg("--match-patterns")
        .arg("*.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 total files"));
}

/// Zero-byte files are skipped even when they match
#[test]
fn test_scan_skips_empty_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("empty.json"), "").unwrap();

    let mut cmd = Command::cargo_bin("vetty").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 total files"));
}

/// Scanning something that is not a directory is an error
#[test]
fn test_scan_rejects_non_directory() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("file.json");
    fs::write(&file, "{}").unwrap();

    let mut cmd = Command::cargo_bin("vetty").unwrap();
    cmd.arg("scan")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

/// Config show prints the effective configuration
#[test]
fn test_config_show() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("vetty").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("match_patterns"))
        .stdout(predicate::str::contains("max_open_files"));
}

/// Config validate accepts a well-formed config file
#[test]
fn test_config_validate() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("vetty.toml");
    fs::write(
        &config_path,
        "[scan]\nmatch_patterns = [\"*.yaml\"]\nmax_open_files = 8\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("vetty").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("config")
        .arg("validate")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}
