use crate::cli::support::{blockref, indexed_project};
use predicates::prelude::*;

#[test]
fn test_backlinks_lists_referencing_blocks() {
    let dir = indexed_project();

    blockref()
        .current_dir(dir.path())
        .args(["backlinks", "b1a2c3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("^c00002"))
        .stdout(predicate::str::contains("locality.md:3"));
}

#[test]
fn test_backlinks_accepts_caret_prefix() {
    let dir = indexed_project();

    blockref()
        .current_dir(dir.path())
        .args(["backlinks", "^B9F8E7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("^c00001"));
}

#[test]
fn test_backlinks_none() {
    let dir = indexed_project();

    blockref()
        .current_dir(dir.path())
        .args(["backlinks", "d00001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No backlinks for ^d00001"));
}

#[test]
fn test_backlinks_unknown_id_is_not_an_error() {
    let dir = indexed_project();

    blockref()
        .current_dir(dir.path())
        .args(["backlinks", "zzzz99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No backlinks"));
}

#[test]
fn test_backlinks_to_dangling_target() {
    let dir = indexed_project();

    blockref()
        .current_dir(dir.path())
        .args(["backlinks", "gone00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("^c00001"));
}
