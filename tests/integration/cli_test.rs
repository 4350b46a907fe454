//! Integration tests for the graphexport binary

#[path = "../common/mod.rs"]
mod common;

use common::{read_json, write_fixture_tables};
use serde_json::json;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_graphexport(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_graphexport"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute graphexport")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_no_arguments_uses_pipeline_layout() {
    let tmp = tempdir().unwrap();
    let workdir = tmp.path().join("memeED-graphRAG").join("memeED-kg");
    write_fixture_tables(&workdir.join("output"));

    let output = run_graphexport(&workdir, &[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let export_dir = tmp
        .path()
        .join("memeED-graphRAG")
        .join("memeED-kg")
        .join("../../memeED-backend/graphrag_export");
    assert!(stdout(&output).contains("Exported to ../../memeED-backend/graphrag_export"));

    let graph = read_json(&export_dir.join("graph.json"));
    assert_eq!(graph["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(graph["edges"].as_array().unwrap().len(), 2);
    assert!(export_dir.join("communities.json").exists());
}

#[test]
fn test_directory_overrides() {
    let input = tempdir().unwrap();
    let output_dir = tempdir().unwrap();
    write_fixture_tables(input.path());

    let output = run_graphexport(
        input.path(),
        &[
            "--input-dir",
            input.path().to_str().unwrap(),
            "--output-dir",
            output_dir.path().to_str().unwrap(),
            "--relationship-fields",
            "source,target",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let graph = read_json(&output_dir.path().join("graph.json"));
    assert_eq!(
        graph["edges"],
        json!([
            {"source": "e1", "target": "e2"},
            {"source": "e2", "target": "e3"}
        ])
    );
}

#[test]
fn test_stats_output() {
    let input = tempdir().unwrap();
    let output_dir = tempdir().unwrap();
    write_fixture_tables(input.path());

    let output = run_graphexport(
        input.path(),
        &[
            "--input-dir",
            input.path().to_str().unwrap(),
            "-o",
            output_dir.path().to_str().unwrap(),
            "--stats",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Export Statistics:"));
    assert!(text.contains("entities:"));
    assert!(text.contains("3 records"));
}

#[test]
fn test_quiet_suppresses_success_line() {
    let input = tempdir().unwrap();
    let output_dir = tempdir().unwrap();
    write_fixture_tables(input.path());

    let output = run_graphexport(
        input.path(),
        &[
            "--input-dir",
            input.path().to_str().unwrap(),
            "-o",
            output_dir.path().to_str().unwrap(),
            "--quiet",
        ],
    );
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(output_dir.path().join("graph.json").exists());
}

#[test]
fn test_missing_input_exits_non_zero() {
    let tmp = tempdir().unwrap();
    let output_dir = tmp.path().join("export");

    let output = run_graphexport(
        tmp.path(),
        &["-o", output_dir.to_str().unwrap()],
    );

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("does not exist"), "stderr: {}", err);
    assert!(err.contains("communities"), "stderr: {}", err);
    assert!(!output_dir.exists());
}

#[test]
fn test_invalid_field_list_is_rejected() {
    let tmp = tempdir().unwrap();
    let output = run_graphexport(tmp.path(), &["--entity-fields", "id,id"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid configuration"));
}

#[test]
fn test_unknown_policy_is_a_usage_error() {
    let tmp = tempdir().unwrap();
    let output = run_graphexport(tmp.path(), &["--on-unsupported", "ignore"]);

    assert!(!output.status.success());
    assert!(!fs::read_dir(tmp.path()).unwrap().any(|_| true));
}
