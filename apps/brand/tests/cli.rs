use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn brand() -> Command {
    Command::cargo_bin("site-brand").expect("binary is built")
}

#[test]
fn prints_the_record_unchanged() {
    let output = brand().assert().success().get_output().stdout.clone();
    let value: Value = serde_json::from_slice(&output).expect("stdout is JSON");
    let expected = serde_json::to_value(site_content::config()).expect("serialize brand");

    assert_eq!(value, expected);
    assert_eq!(value["companyName"], "Figma");
    assert_eq!(value["image"], "/og.png");
    assert_eq!(value["url"], "https://figma.com");
    assert_eq!(value["fontFamily"], "Inter Variable");
    assert_eq!(value.as_object().map(serde_json::Map::len), Some(5));
}

#[test]
fn compact_output_is_a_single_line() {
    brand()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"companyName\":\"Figma\""))
        .stdout(predicate::str::ends_with("}\n"))
        .stdout(predicate::function(|s: &str| s.lines().count() == 1));
}

#[test]
fn pretty_output_is_indented() {
    brand()
        .arg("--pretty")
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \"fontFamily\": \"Inter Variable\""));
}

#[test]
fn diagnostics_stay_off_stdout() {
    brand()
        .args(["--log-level", "info"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("Emitting branding record").not())
        .stderr(predicate::str::contains("Emitting branding record"));
}

#[test]
fn log_dir_receives_a_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let log_dir = tmp.path().join("logs");

    brand()
        .arg("--log-dir")
        .arg(&log_dir)
        .args(["--log-level", "info"])
        .env_remove("RUST_LOG")
        .assert()
        .success();

    let has_log = fs::read_dir(&log_dir)?
        .flatten()
        .any(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("log"));
    assert!(has_log, "a log file should be created under --log-dir");
    Ok(())
}

#[test]
fn log_level_accepts_only_named_levels() {
    for level in ["loud", "off", "0", "5", "WARN"] {
        brand()
            .args(["--log-level", level])
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("invalid value"));
    }
    for level in ["error", "warn", "info", "debug", "trace"] {
        brand().args(["--log-level", level]).env_remove("RUST_LOG").assert().success();
    }
}
