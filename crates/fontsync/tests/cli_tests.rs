//! Integration tests for the `fontsync` binary
//!
//! Runs the built executable against scratch configs and checks exit codes
//! and the side effects of a full run.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn fontsync(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fontsync"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_config(dir: &Path, body: &str) -> String {
    let path = dir.join("fontsync.yaml");
    fs::write(&path, body).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_missing_config_exits_with_config_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.yaml");

    let output = fontsync(&["--config", &missing.to_string_lossy()], temp.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Configuration file not found"));
}

#[test]
fn test_blank_required_field_exits_with_config_error() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        temp.path(),
        "destination_dir: ''\nlog_file: fontsync.log\nsource_relative_path: Fonts\n",
    );

    let output = fontsync(&["--config", &config], temp.path());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unknown_source_exits_with_fatal_error() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        temp.path(),
        &format!(
            "destination_dir: '{}'\nlog_file: '{}'\nsource_relative_path: fontsync-missing-source/Fonts\nledger: file\n",
            temp.path().join("Fonts").display(),
            temp.path().join("logs").join("fontsync.log").display(),
        ),
    );

    let output = fontsync(&["--silent", "--config", &config], temp.path());
    assert_eq!(output.status.code(), Some(1));

    let log = fs::read_to_string(temp.path().join("logs").join("fontsync.log")).unwrap();
    assert!(log.contains("not found on any mounted drive"), "{}", log);
}

#[cfg(not(windows))]
#[test]
fn test_registry_ledger_with_missing_source_exits_with_config_error() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        temp.path(),
        &format!(
            "destination_dir: '{}'\nlog_file: '{}'\nsource_relative_path: fontsync-missing-source/Fonts\nledger: registry\n",
            temp.path().join("Fonts").display(),
            temp.path().join("logs").join("fontsync.log").display(),
        ),
    );

    let output = fontsync(&["--silent", "--config", &config], temp.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("only available on Windows"));
}

#[cfg(unix)]
#[test]
fn test_registry_ledger_leaves_destination_untouched() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("source");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("Terminal.fon"), b"raster").unwrap();

    let destination = temp.path().join("Fonts");
    let relative = source.to_string_lossy().trim_start_matches('/').to_string();
    let config = write_config(
        temp.path(),
        &format!(
            "destination_dir: '{}'\nlog_file: '{}'\nsource_relative_path: '{}'\nledger: registry\n",
            destination.display(),
            temp.path().join("logs").join("fontsync.log").display(),
            relative,
        ),
    );

    let output = fontsync(&["--silent", "--config", &config], temp.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(!destination.exists());
}

#[cfg(unix)]
#[test]
fn test_full_run_installs_and_writes_logs() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("source");
    fs::create_dir_all(source.join("nested")).unwrap();
    fs::write(source.join("Terminal.fon"), b"raster").unwrap();
    fs::write(source.join("nested").join("Broken.ttf"), b"not a font").unwrap();

    let destination = temp.path().join("Fonts");
    let log_file = temp.path().join("logs").join("fontsync.log");
    // Relative to `/`, the first root probed on Unix
    let relative = source.to_string_lossy().trim_start_matches('/').to_string();
    let config = write_config(
        temp.path(),
        &format!(
            "destination_dir: '{}'\nlog_file: '{}'\nsource_relative_path: '{}'\nledger: file\n",
            destination.display(),
            log_file.display(),
            relative,
        ),
    );

    let output = fontsync(&["--silent", "--config", &config], temp.path());
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(destination.join("Terminal.fon").is_file());
    assert!(destination.join("Broken.ttf").is_file());
    let ledger = fs::read_to_string(destination.join(".fontsync-ledger.json")).unwrap();
    assert!(ledger.contains("\"Terminal (All Res)\": \"Terminal.fon\""));
    assert!(ledger.contains("\"Broken (TrueType)\": \"Broken.ttf\""));

    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("Installed font: Terminal (Type: fon)"));
    assert!(log.contains("Installed font: Broken (Type: ttf)"));

    let transcripts = temp.path().join("logs").join("transcripts");
    assert_eq!(fs::read_dir(&transcripts).unwrap().count(), 1);

    // A second run finds everything already installed
    let output = fontsync(&["--silent", "--config", &config], temp.path());
    assert_eq!(output.status.code(), Some(0));
    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("Font already installed: Terminal (Type: fon)"));
}
