// End-to-end tests for the secondmax binary over stdin

use assert_cmd::Command;
use tempfile::TempDir;

/// Binary with a clean config environment, run from an empty directory
fn secondmax(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("secondmax").expect("binary builds");
    cmd.current_dir(dir.path())
        .env_remove("SECONDMAX_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command, input: &str) -> String {
    let output = cmd.write_stdin(input).assert().success().get_output().clone();
    String::from_utf8(output.stdout).expect("utf-8 stdout")
}

#[test]
fn test_prompts_and_result_line() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(&mut secondmax(&dir), "5\n5 3 9 9 2\n");

    assert_eq!(
        out,
        "Enter number of elements: Enter the elements:\nSecond largest unique number: 5\n"
    );
}

#[test]
fn test_sentinel_for_single_distinct_value() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(secondmax(&dir).arg("--no-prompt"), "3\n3 3 3\n");
    assert_eq!(out, "Second largest unique number: -1\n");
}

#[test]
fn test_empty_sequence() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(secondmax(&dir).arg("--no-prompt"), "0\n");
    assert_eq!(out, "Second largest unique number: -1\n");
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(
        secondmax(&dir).args(["--no-prompt", "--format", "json"]),
        "2 -1 -1",
    );
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["result"], -1);
    assert!(json["second_largest"].is_null());
}

#[test]
fn test_malformed_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = secondmax(&dir)
        .arg("--no-prompt")
        .write_stdin("3\n1 two 3\n")
        .assert()
        .failure()
        .get_output()
        .clone();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("element 1 is not an integer"), "{}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_too_few_elements_fails() {
    let dir = TempDir::new().unwrap();
    let output = secondmax(&dir)
        .arg("--no-prompt")
        .write_stdin("4\n1 2\n")
        .assert()
        .failure()
        .get_output()
        .clone();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected 4 elements, found 2"), "{}", stderr);
}

#[test]
fn test_config_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".secondmax.toml"),
        "[prompts]\ncount = \"n> \"\nelements = \"values> \"\n",
    )
    .unwrap();

    let out = stdout_of(&mut secondmax(&dir), "2\n7 8\n");
    assert_eq!(out, "n> values> Second largest unique number: 7\n");
}

#[test]
fn test_explicit_config_via_env() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[prompts]\nenabled = false\n[output]\nformat = \"json\"\n").unwrap();

    let out = stdout_of(secondmax(&dir).env("SECONDMAX_CONFIG", &config), "3 1 2 3");
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["second_largest"], 2);
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    secondmax(&dir)
        .args(["--config", "does-not-exist.toml"])
        .write_stdin("1 1")
        .assert()
        .failure();
}

#[test]
fn test_huge_count_with_short_input_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let output = secondmax(&dir)
        .arg("--no-prompt")
        .write_stdin("1000000000000000000\n1 2\n")
        .assert()
        .failure()
        .get_output()
        .clone();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("expected 1000000000000000000 elements, found 2"),
        "{}",
        stderr
    );
}

#[test]
fn test_json_output_is_parseable_with_prompts_enabled() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(secondmax(&dir).args(["--format", "json"]), "3\n4 9 4\n");
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["second_largest"], 4);
    assert!(!out.contains("Enter"));
}

#[test]
fn test_json_from_config_file_is_parseable() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".secondmax.toml"), "[output]\nformat = \"json\"\n").unwrap();

    let out = stdout_of(&mut secondmax(&dir), "2\n1 1\n");
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(json["second_largest"].is_null());
}
