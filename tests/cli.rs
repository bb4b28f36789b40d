use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

const BINARY_NAME: &str = "seo-dashboard";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Usage:"))
        .stdout(contains("themes"))
        .stdout(contains("--theme"));
}

#[test]
/// Themes command should list every theme key in picker order.
fn themes_command_lists_keys() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("themes")
        .assert()
        .success()
        .stdout("neonNights\nnatureInspired\noceanBreeze\nsunsetVibes\ngalaxyPurple\n");
}

#[test]
/// Paths command should list titles with their total XP.
fn paths_command_lists_learning_paths() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("paths")
        .assert()
        .success()
        .stdout(contains("SEO E-commerce"))
        .stdout(contains("450 XP"))
        .stdout(contains("SEO Técnico"))
        .stdout(contains("575 XP"));
}

#[test]
/// An unknown theme is rejected before the terminal is touched.
fn unknown_theme_is_rejected() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--theme")
        .arg("midnight")
        .assert()
        .failure()
        .stderr(contains("Unknown theme 'midnight'"));
}

#[test]
/// An unknown path is rejected by the run subcommand too.
fn unknown_path_is_rejected() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("run")
        .arg("--path")
        .arg("social")
        .assert()
        .failure()
        .stderr(contains("Unknown learning path 'social'"));
}

#[test]
/// A config file naming an unknown theme aborts startup.
fn invalid_config_file_is_rejected() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let config_path = tmp.path().join("config.json");
    fs::write(&config_path, r#"{"theme": "midnight"}"#).unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--config")
        .arg(&config_path)
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .code(1)
        .stderr(contains("Failed to load config"))
        .stderr(contains("Unknown theme 'midnight'"));
}

#[test]
/// Startup errors are reported once, as a CLI message, without a debug dump.
fn config_error_is_reported_once() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let config_path = tmp.path().join("config.json");
    fs::write(&config_path, r#"{"path": "social"}"#).unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--config")
        .arg(&config_path)
        .assert()
        .code(1)
        .stderr(contains("Unknown learning path 'social'").count(1))
        .stderr(contains("Config {").not());
}

#[test]
/// An explicitly requested config file must exist.
fn missing_config_file_is_rejected() {
    let tmp = tempfile::tempdir().expect("create temp dir");

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--config")
        .arg(tmp.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(contains("Invalid config file"));
}
