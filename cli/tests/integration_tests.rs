use std::fs;
use std::process::{Command, Output};

fn run_parse_options(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_parse-options"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run parse-options")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "parse-options failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[test]
fn prints_arguments_and_options_as_json() {
    let output = run_parse_options(&[
        "--",
        "test",
        "-test",
        "-othertest",
        "--newtest=test",
        "-nt=newtest",
        "--doubledash",
    ]);

    assert_eq!(
        stdout_json(&output),
        serde_json::json!({
            "arguments": ["test"],
            "options": {
                "test": true,
                "othertest": true,
                "newtest": "test",
                "nt": "newtest",
                "doubledash": true
            }
        })
    );
}

#[test]
fn empty_token_list_is_valid() {
    let output = run_parse_options(&[]);
    assert_eq!(
        stdout_json(&output),
        serde_json::json!({ "arguments": [], "options": {} })
    );
}

#[test]
fn yaml_output_format() {
    let output = run_parse_options(&["--format", "yaml", "--", "in.txt", "--k=a=b"]);
    assert!(output.status.success());

    let yaml: serde_yaml::Value = serde_yaml::from_slice(&output.stdout).unwrap();
    assert_eq!(yaml["arguments"][0].as_str(), Some("in.txt"));
    assert_eq!(yaml["options"]["k"].as_str(), Some("a=b"));
}

// ---------------------------------------------------------------------------
// Aliases
// ---------------------------------------------------------------------------

#[test]
fn inline_alias_resolves_short_tokens() {
    let output = run_parse_options(&["--alias", "t=trythisone", "--", "-t=test", "--t"]);
    let json = stdout_json(&output);

    assert_eq!(json["options"]["trythisone"], "test");
    assert_eq!(json["options"]["t"], true);
}

#[test]
fn alias_file_with_inline_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aliases.yaml");
    fs::write(&path, "t: trythisone\nv: verbose\n").unwrap();

    let output = run_parse_options(&[
        "--aliases",
        path.to_str().unwrap(),
        "--alias",
        "t=target",
        "--",
        "-t=x86",
        "-v",
    ]);
    let json = stdout_json(&output);

    assert_eq!(json["options"]["target"], "x86");
    assert_eq!(json["options"]["verbose"], true);
    assert!(json["options"].get("trythisone").is_none());
}

#[test]
fn missing_alias_file_fails() {
    let output = run_parse_options(&["--aliases", "/nonexistent/aliases.yaml", "--", "-t"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load aliases"), "stderr: {stderr}");
}

#[test]
fn malformed_inline_alias_fails() {
    let output = run_parse_options(&["--alias", "trythisone", "--", "-t"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid alias definition"), "stderr: {stderr}");
}

#[test]
fn unreachable_alias_warns_but_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aliases.json");
    fs::write(&path, r#"{"-t": "trythisone"}"#).unwrap();

    let output = run_parse_options(&["--aliases", path.to_str().unwrap(), "--", "-t"]);
    let json = stdout_json(&output);
    assert_eq!(json["options"]["t"], true);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("can never match"), "stderr: {stderr}");
}

#[test]
fn strict_aliases_rejects_unreachable_alias() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aliases.json");
    fs::write(&path, r#"{"k=v": "key"}"#).unwrap();

    let output = run_parse_options(&[
        "--aliases",
        path.to_str().unwrap(),
        "--strict-aliases",
        "--",
        "-k",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid aliases"), "stderr: {stderr}");
}

#[test]
fn inline_alias_with_equals_in_canonical_name_fails() {
    let output = run_parse_options(&["--alias", "t=a=b", "--", "-t"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid alias definition"), "stderr: {stderr}");
}
