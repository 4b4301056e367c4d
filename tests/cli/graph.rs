use crate::cli::support::{blockref, indexed_project};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_graph_dot_default() {
    let dir = indexed_project();

    blockref()
        .current_dir(dir.path())
        .arg("graph")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph blocks {"))
        .stdout(predicate::str::contains(
            "\"b1a2c3\" [label=\"b1a2c3\\nphysics.md:2\"];",
        ))
        .stdout(predicate::str::contains("\"c00002\" -> \"b1a2c3\";"))
        .stdout(predicate::str::contains("\"c00001\" -> \"gone00\";"))
        .stdout(predicate::str::contains(
            "\"gone00\" [label=\"gone00\", style=dashed];",
        ));
}

#[test]
fn test_graph_json() {
    let dir = indexed_project();

    let output = blockref()
        .current_dir(dir.path())
        .args(["graph", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let nodes = value["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 7);
    assert_eq!(value["edges"].as_array().unwrap().len(), 3);

    let unresolved: Vec<&serde_json::Value> =
        nodes.iter().filter(|n| n["unresolved"] == true).collect();
    assert_eq!(unresolved.len(), 1);
    assert_eq!(unresolved[0]["id"], "gone00");
}

#[test]
fn test_graph_invalid_format() {
    let dir = indexed_project();

    blockref()
        .current_dir(dir.path())
        .args(["graph", "--format=svg"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("svg"));
}

#[test]
fn test_graph_empty_store() {
    let dir = tempdir().unwrap();

    blockref()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    blockref()
        .current_dir(dir.path())
        .arg("graph")
        .assert()
        .success()
        .stdout(predicate::str::contains("digraph blocks {\n}"))
        .stderr(predicate::str::contains("No blocks indexed"));
}
