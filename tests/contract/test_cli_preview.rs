// Contract test for `datedirs preview`

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use assert_cmd::Command;
use predicates::prelude::*;

/// Command with an empty defaults file so the user's config never leaks in
fn datedirs(temp_dir: &Path) -> Command {
    let config_path = temp_dir.join("datedirs.toml");
    fs::write(&config_path, "").unwrap();

    let mut cmd = Command::cargo_bin("datedirs").unwrap();
    cmd.arg("preview").arg("--config").arg(config_path);
    cmd
}

#[test]
fn test_preview_weekly_listing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("out");

    let mut cmd = datedirs(temp_dir.path());
    cmd.args(["--label", "Proj", "--year", "2020", "--month", "1", "--day", "1", "--count", "3"])
        .arg("--root")
        .arg(&root);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("First directory name: Proj-2020-1-1"))
        .stdout(predicate::str::contains(" #1: "))
        .stdout(predicate::str::contains("Proj-2020-01-01"))
        .stdout(predicate::str::contains("Proj-2020-01-08"))
        .stdout(predicate::str::contains(" #3: "))
        .stdout(predicate::str::contains("Proj-2020-01-15"))
        .stdout(predicate::str::contains("#4").not());

    assert!(!root.exists(), "preview must not create anything");
}

#[test]
fn test_preview_monthly_json() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("out");

    let mut cmd = datedirs(temp_dir.path());
    cmd.args(["--label", "Proj", "--year", "2020", "--cadence", "monthly", "--count", "3", "--json"])
        .arg("--root")
        .arg(&root);

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["cadence"], "monthly");
    assert_eq!(json["count"], 3);
    assert_eq!(json["first_name"], "Proj-2020-1-");

    let directories: Vec<String> = json["directories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d.as_str().unwrap().to_string())
        .collect();
    let expected: Vec<String> = ["Proj-2020-00", "Proj-2020-01", "Proj-2020-02"]
        .iter()
        .map(|leaf| root.join(leaf).display().to_string())
        .collect();
    assert_eq!(directories, expected);
}

#[test]
fn test_preview_uses_built_in_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = datedirs(temp_dir.path());
    cmd.arg("--root").arg(temp_dir.path()).arg("--json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["cadence"], "weekly");
    assert_eq!(json["count"], 52);
    assert_eq!(json["first_name"], "Default-2020-1-1");
}

#[test]
fn test_preview_full_year_splits_columns() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = datedirs(temp_dir.path());
    cmd.args(["--count", "52"]).arg("--root").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("#26: "))
        .stdout(predicate::str::contains("#52: "))
        .stdout(predicate::str::contains("Default-2020-12-23"));
}

#[test]
fn test_preview_invalid_date() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = datedirs(temp_dir.path());
    cmd.args(["--year", "2020", "--month", "2", "--day", "30"])
        .arg("--root")
        .arg(temp_dir.path());

    cmd.assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid date: 2020-02-30"));
}

#[test]
fn test_preview_stem_keeps_typed_padding() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = datedirs(temp_dir.path());
    cmd.args(["--label", "Proj", "--year", "2021", "--month", "03", "--day", "07", "--count", "1"])
        .arg("--root")
        .arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("First directory name: Proj-2021-03-07"))
        .stdout(predicate::str::contains("Proj-2021-03-07"));
}

#[test]
fn test_preview_rejects_five_digit_year() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = datedirs(temp_dir.path());
    cmd.args(["--year", "10000", "--count", "2"])
        .arg("--root")
        .arg(temp_dir.path());

    cmd.assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid date: 10000-01-01"))
        .stdout(predicate::str::contains("+10000").not());
}

#[test]
fn test_preview_sequence_past_year_9999() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = datedirs(temp_dir.path());
    cmd.args(["--year", "9999", "--month", "12", "--day", "31", "--count", "2"])
        .arg("--root")
        .arg(temp_dir.path());

    cmd.assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Date out of range"));
}

#[test]
fn test_preview_monthly_accepts_any_day() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = datedirs(temp_dir.path());
    cmd.args(["--cadence", "m", "--month", "2", "--day", "30", "--count", "1"])
        .arg("--root")
        .arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Default-2020-00"));
}

#[test]
fn test_preview_rejects_non_digit_date() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = datedirs(temp_dir.path());
    cmd.args(["--month", "Jan"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Month must contain digits only"));
}

#[test]
fn test_preview_rejects_count_over_limit() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = datedirs(temp_dir.path());
    cmd.args(["--cadence", "monthly", "--count", "13"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("between 1 and 12 entries"));
}

#[test]
fn test_preview_rejects_unknown_cadence() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = datedirs(temp_dir.path());
    cmd.args(["--cadence", "daily"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown cadence 'daily'"));
}

#[test]
fn test_preview_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("datedirs").unwrap();
    cmd.arg("preview")
        .arg("--config")
        .arg(temp_dir.path().join("nope.toml"));

    cmd.assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Configuration file not found"));
}
