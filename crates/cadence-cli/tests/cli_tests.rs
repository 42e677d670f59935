use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const KARACHI_PROMPT: &str = "Run a 2-day product launch campaign for a new AI writing tool \
                              focused on creators and marketers. Tone inspiring. \
                              Start 2025-08-11 in Asia/Karachi.";

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn cadence_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cadence").expect("Failed to find cadence binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_brief_extracts_fields() {
    let temp_dir = create_cli_test_environment();
    cadence_cmd()
        .args(["--artifacts-dir", temp_dir.path().to_str().unwrap()])
        .args(["brief", KARACHI_PROMPT])
        .assert()
        .success()
        .stdout(predicate::str::contains("AI writing tool"))
        .stdout(predicate::str::contains("Tone: inspiring"))
        .stdout(predicate::str::contains("Timezone: Asia/Karachi"))
        .stdout(predicate::str::contains("Start: 2025-08-11"));
}

#[test]
fn test_cli_preview_lists_slots() {
    let temp_dir = create_cli_test_environment();
    cadence_cmd()
        .args(["--artifacts-dir", temp_dir.path().to_str().unwrap()])
        .args(["preview", KARACHI_PROMPT])
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 days)"))
        .stdout(predicate::str::contains("2025-08-11"))
        .stdout(predicate::str::contains("2025-08-12"))
        .stdout(predicate::str::contains("x, linkedin"))
        .stdout(predicate::str::contains("instagram, x"));
}

#[test]
fn test_cli_run_writes_json_artifact() {
    let temp_dir = create_cli_test_environment();
    let artifacts_arg = temp_dir.path().to_str().unwrap();

    cadence_cmd()
        .args(["--artifacts-dir", artifacts_arg, "run", KARACHI_PROMPT])
        .assert()
        .success()
        .stdout(predicate::str::contains("scheduled 4 posts"))
        .stdout(predicate::str::contains("schedule.json"));

    let json = std::fs::read_to_string(temp_dir.path().join("schedule.json"))
        .expect("schedule.json not written");
    assert!(json.contains("\"mediaUrl\""));
    assert!(json.contains("2025-08-11T09:00:00+05:00"));
}

#[test]
fn test_cli_run_with_csv_export() {
    let temp_dir = create_cli_test_environment();
    let artifacts_arg = temp_dir.path().to_str().unwrap();

    cadence_cmd()
        .args([
            "--artifacts-dir",
            artifacts_arg,
            "run",
            KARACHI_PROMPT,
            "--csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("schedule.csv"));

    let csv = std::fs::read_to_string(temp_dir.path().join("schedule.csv"))
        .expect("schedule.csv not written");
    assert!(csv.starts_with("campaign,platform,text,mediaUrl,timestamp,theme,dayIndex,daypart"));
}

#[test]
fn test_cli_run_local_provider_renders_images() {
    let temp_dir = create_cli_test_environment();
    let artifacts_arg = temp_dir.path().to_str().unwrap();

    cadence_cmd()
        .args([
            "--artifacts-dir",
            artifacts_arg,
            "--provider",
            "local",
            "run",
            KARACHI_PROMPT,
        ])
        .assert()
        .success();

    let images: Vec<_> = std::fs::read_dir(temp_dir.path().join("images"))
        .expect("images directory not created")
        .collect();
    assert_eq!(images.len(), 2);
}

#[test]
fn test_cli_run_rejects_out_of_range_days() {
    let temp_dir = create_cli_test_environment();
    let artifacts_arg = temp_dir.path().to_str().unwrap();

    cadence_cmd()
        .args([
            "--artifacts-dir",
            artifacts_arg,
            "run",
            "Run a 45-day campaign for a product in Asia/Karachi",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("days"));
}

#[test]
fn test_cli_run_rejects_unknown_timezone() {
    let temp_dir = create_cli_test_environment();
    let artifacts_arg = temp_dir.path().to_str().unwrap();

    cadence_cmd()
        .args([
            "--artifacts-dir",
            artifacts_arg,
            "run",
            "Launch a product in Nowhere/Atlantis on 2025-08-11",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nowhere/Atlantis"));
}

#[test]
fn test_cli_requires_subcommand() {
    cadence_cmd().assert().failure();
}

#[test]
fn test_cli_help_lists_commands() {
    cadence_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("preview"))
        .stdout(predicate::str::contains("brief"))
        .stdout(predicate::str::contains("serve"));
}
