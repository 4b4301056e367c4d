use crate::cli::support::{blockref, indexed_project};
use predicates::prelude::*;

#[test]
fn test_open_prints_location() {
    let dir = indexed_project();

    blockref()
        .current_dir(dir.path())
        .args(["open", "c00002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("locality.md:3"));
}

#[test]
fn test_open_unknown_block_fails() {
    let dir = indexed_project();

    blockref()
        .current_dir(dir.path())
        .args(["open", "zzzz99"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("block not found"));
}

#[cfg(unix)]
#[test]
fn test_open_launches_editor() {
    let dir = indexed_project();

    blockref()
        .current_dir(dir.path())
        .args(["open", "b1a2c3", "--editor", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("physics.md:2"));
}

#[test]
fn test_open_missing_editor_fails() {
    let dir = indexed_project();

    blockref()
        .current_dir(dir.path())
        .args(["open", "b1a2c3", "--editor", "definitely-not-an-editor-xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open editor"));
}
