use std::io::Write;
use std::process::{Command, Output, Stdio};

const DIAMOND_INPUT: &str = "4\n1 2 3 4\n4\n1 2 1\n2 3 2\n1 3 5\n3 4 1\n1 4\n";

// Runs the binary with `args`, feeding `input` on stdin
fn run_cli(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_keyed_sssp"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start keyed_sssp");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait for keyed_sssp")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_cli_prints_arrow_joined_path() {
    let output = run_cli(&[], DIAMOND_INPUT);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "1 -> 2 -> 3 -> 4\n");
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_cli_custom_separator() {
    let output = run_cli(&["--separator", ","], DIAMOND_INPUT);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "1,2,3,4\n");
}

#[test]
fn test_cli_no_path_goes_to_stderr() {
    let output = run_cli(&[], "2\n1 2\n0\n1 2\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert_eq!(stderr(&output), "no path from 1 to 2\n");
}

#[test]
fn test_cli_malformed_token_is_an_input_error() {
    let output = run_cli(&[], "2\n1 2\n1\n1 2 heavy\n1 2\n");

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.starts_with("error: "), "unexpected stderr: {}", err);
    assert!(err.contains("heavy"));
    assert!(err.contains("edge weight"));
}

#[test]
fn test_cli_truncated_input_is_an_input_error() {
    let output = run_cli(&[], "3\n1 2");

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("expected vertex key"));
}

#[test]
fn test_cli_dangling_edge_dropped_unless_strict() {
    let input = "2\n1 2\n2\n1 2 4\n1 9 1\n1 2\n";

    let lenient = run_cli(&[], input);
    assert_eq!(lenient.status.code(), Some(0));
    assert_eq!(stdout(&lenient), "1 -> 2\n");

    let strict = run_cli(&["--strict"], input);
    assert_eq!(strict.status.code(), Some(2));
    assert!(stdout(&strict).is_empty());
    assert!(stderr(&strict).contains("Vertex 9 is not in the graph"));
}

#[test]
fn test_cli_json_report() {
    let output = run_cli(&["--format", "json"], DIAMOND_INPUT);
    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["from"], 1);
    assert_eq!(json["to"], 4);
    assert_eq!(json["success"], true);
    assert_eq!(json["distance"], 4);
    assert_eq!(json["path"], serde_json::json!([1, 2, 3, 4]));
    assert_eq!(json["stats"]["settled"], 4);
}

#[test]
fn test_cli_json_report_without_path() {
    let output = run_cli(&["--format", "json"], "2\n1 2\n0\n2 1\n");
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["success"], false);
    assert!(json.get("distance").is_none());
    assert_eq!(json["path"], serde_json::json!([]));
}

#[test]
fn test_cli_float_weights() {
    let input = "3\n10 20 30\n3\n10 20 0.5\n20 30 0.25\n10 30 1.0\n10 30\n";

    let output = run_cli(&["--weights", "float", "--format", "json"], input);
    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["distance"], 0.75);
    assert_eq!(json["path"], serde_json::json!([10, 20, 30]));

    // The same input is rejected when weights must be integers
    let output = run_cli(&[], input);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_cli_prompts_precede_output() {
    let output = run_cli(&["--prompts"], DIAMOND_INPUT);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Type number of vertices"));
    assert_eq!(lines[3], "1 -> 2 -> 3 -> 4");
}
