//! End-to-end tests of the `phantom` binary.

use std::process::Command;

fn phantom() -> Command {
    Command::new(env!("CARGO_BIN_EXE_phantom"))
}

#[test]
fn test_generate_json_writes_slices() {
    let dir = tempfile::tempdir().unwrap();
    let output = phantom()
        .args([
            "generate", "--width", "32", "--height", "24", "--depth", "5", "--rotation", "7",
            "--slices", "0,4", "--json", "-o",
        ])
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["report"]["shape"], serde_json::json!([5, 24, 32]));
    assert_eq!(json["files"].as_array().unwrap().len(), 2);
    assert!(dir.path().join("slice_0000.png").exists());
    assert!(dir.path().join("slice_0004.png").exists());
}

#[test]
fn test_validate_rejects_degenerate_tilt() {
    let output = phantom()
        .args(["validate", "--rotation", "-30", "--height", "300", "--json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"][0]["code"], "CLI_002");
}

#[test]
fn test_missing_config_is_parameter_error() {
    let output = phantom()
        .args(["validate", "--config", "/nonexistent/phantom.json", "--json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["errors"][0]["code"], "CLI_001");
}

#[test]
fn test_defaults_round_trip_through_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("defaults.json");

    let output = phantom().arg("defaults").output().unwrap();
    assert!(output.status.success());
    std::fs::write(&config, &output.stdout).unwrap();

    let output = phantom()
        .args(["validate", "--json", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], true);
    assert_eq!(json["geometry"]["stretch_height"], 400);
}
