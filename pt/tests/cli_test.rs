//! Integration tests for the pt binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pt() -> Command {
    let mut cmd = Command::cargo_bin("pt").expect("pt binary should build");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_describe_prints_goal_and_steps() {
    pt().args(["describe", "--goal", "ship it", "--step", "build", "--step", "release"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal:\nship it"))
        .stdout(predicate::str::contains("Current Step (1): build [pending]"))
        .stdout(predicate::str::contains("Step 2: release [pending]"));
}

#[test]
fn test_run_completes_every_step() {
    pt().args([
        "run", "--goal", "ship it", "--step", "build", "--step", "release", "--result", "built", "--result",
        "v1.0.0",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("End of plan"))
    .stdout(predicate::str::contains("Step 1: build [complete] -> built"))
    .stdout(predicate::str::contains("Current Step (2): release [complete] -> v1.0.0"));
}

#[test]
fn test_run_json_summary() {
    let output = pt()
        .args(["run", "-g", "ship", "-s", "a", "-s", "b", "-s", "c", "-r", "ok", "--format", "json"])
        .output()
        .expect("pt should run");
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(summary["goal"]["description"], "ship");
    assert_eq!(summary["current_step_index"], 2);
    assert_eq!(summary["steps"][0]["result"], "ok");
    assert!(summary["steps"][1].get("result").is_none());
    for step in summary["steps"].as_array().unwrap() {
        assert_eq!(step["status"], "complete");
        assert_eq!(step["completions"], 1);
    }
}

#[test]
fn test_config_default_result_and_show_plan() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("pt.yml");
    std::fs::write(&config, "show-plan: true\ndefault-result: fine\n").unwrap();

    pt().args(["-c", config.to_str().unwrap(), "run", "-g", "ship", "-s", "a", "-s", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 2: b [complete] -> fine"))
        .stdout(predicate::str::contains("Current Step (2): b [pending]"));
}

#[test]
fn test_missing_config_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("nope.yml");

    pt().args(["-c", config.to_str().unwrap(), "describe", "-g", "ship", "-s", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_run_without_steps_is_rejected() {
    pt().args(["run", "--goal", "ship"]).assert().failure();
}
