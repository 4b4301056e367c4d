use crate::cli::support::{blockref, indexed_project, write};
use predicates::prelude::*;

#[test]
fn test_find_matches_content() {
    let dir = indexed_project();

    blockref()
        .current_dir(dir.path())
        .args(["find", "entanglement"])
        .assert()
        .success()
        .stdout(predicate::str::contains("^b1a2c3"))
        .stdout(predicate::str::contains("physics.md:2"))
        .stdout(predicate::str::contains("^b9f8e7"))
        .stdout(predicate::str::contains("^d00001").not());
}

#[test]
fn test_find_includes_heading_path() {
    let dir = indexed_project();

    blockref()
        .current_dir(dir.path())
        .args(["find", "tomatoes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Locality :: gardening tomatoes"));
}

#[test]
fn test_find_no_matches() {
    let dir = indexed_project();

    blockref()
        .current_dir(dir.path())
        .args(["find", "xylophone"])
        .assert()
        .success()
        .code(0)
        .stdout(predicate::str::contains("No matches for 'xylophone'"));
}

#[test]
fn test_find_limit() {
    let dir = indexed_project();

    let output = blockref()
        .current_dir(dir.path())
        .args(["find", "entanglement", "--limit", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 1);
}

#[test]
fn test_find_invalid_limit_is_usage_error() {
    let dir = indexed_project();

    blockref()
        .current_dir(dir.path())
        .args(["find", "entanglement", "--limit", "many"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_find_truncates_long_content() {
    let dir = indexed_project();
    let long = format!("marker {} ^long01\n", "word ".repeat(40));
    write(dir.path(), "vault/long.md", &long);
    blockref()
        .current_dir(dir.path())
        .arg("index")
        .assert()
        .success();

    blockref()
        .current_dir(dir.path())
        .args(["find", "marker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("..."));
}

#[test]
fn test_find_before_index_is_empty() {
    let dir = tempfile::tempdir().unwrap();

    blockref()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    blockref()
        .current_dir(dir.path())
        .args(["find", "anything"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matches"));
}
