//! CLI integration tests for `atlas-inspect`.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run atlas-inspect with `args`, feeding `stdin`, and return (stdout, stderr, success).
fn run(args: &[&str], stdin: &str) -> (String, String, bool) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_atlas-inspect"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn atlas-inspect");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    let output = child.wait_with_output().expect("failed to wait for atlas-inspect");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

#[test]
fn test_format_argument_json() {
    let (stdout, _, ok) = run(&["--format", "f 0 0 1 1 0 0 0 v 1"], "");
    assert!(ok, "decoding a valid atlas should succeed");
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["version"], 1);
    assert_eq!(json["frames"][0]["width"], 1);
    assert_eq!(json["animations"].as_array().map(|a| a.len()), Some(0));
}

#[test]
fn test_stdin_with_trailing_newline() {
    let (stdout, _, ok) = run(&["-", "--output", "yaml"], "f 0 0 1 1 0 0 1 v 1\n");
    assert!(ok, "stdin input should succeed");
    assert!(stdout.contains("rotated: true"));
}

#[test]
fn test_json_input() {
    let (stdout, _, ok) = run(&["--json-input"], "\"f 0 0 1 1 0 0 0 v 1\"");
    assert!(ok, "json string input should succeed");
    assert!(stdout.contains("\"localX\": 0"));
}

#[test]
fn test_json_input_not_a_string() {
    let (_, stderr, ok) = run(&["--json-input"], "123");
    assert!(!ok, "non-string json input should fail");
    assert!(stderr.contains("not a string"));
}

#[test]
fn test_animation_frames() {
    let (stdout, _, ok) = run(
        &["--animation", "walk"],
        "f 0 0 1 1 0 0 0 4 0 1 1 0 0 0 8 0 1 1 0 0 0 a \"walk\" 1 1 1 2 v 1",
    );
    assert!(ok, "animation lookup should succeed");
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let frames = json.as_array().expect("frames array");
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0]["x"], 4);
    assert_eq!(frames[1]["x"], 8);
}

#[test]
fn test_unknown_animation() {
    let (_, stderr, ok) = run(&["--animation", "run", "--format", "f 0 0 1 1 0 0 0 v 1"], "");
    assert!(!ok);
    assert!(stderr.contains("no animation named"));
}

#[test]
fn test_decode_error_is_reported() {
    let (_, stderr, ok) = run(&["--format", "f 0 0 1 1 0 0 0 v 2"], "");
    assert!(!ok, "unsupported version should fail");
    assert!(stderr.contains("invalid version"));
}
