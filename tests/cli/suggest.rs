use crate::cli::support::{blockref, indexed_project, write};
use predicates::prelude::*;

#[test]
fn test_suggest_ranks_related_block() {
    let dir = indexed_project();

    let output = blockref()
        .current_dir(dir.path())
        .args(["suggest-links", "b1a2c3", "--min-score", "0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("^b9f8e7"));
    assert!(!stdout.contains("^d00001"), "zero-overlap block suggested");
    assert!(!stdout.contains("^b1a2c3  "), "source suggested to itself");
}

#[test]
fn test_suggest_excludes_linked_targets() {
    let dir = indexed_project();

    // c00001 already links to b9f8e7
    blockref()
        .current_dir(dir.path())
        .args(["suggest-links", "c00001", "--min-score=0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("^b9f8e7").not());
}

#[test]
fn test_suggest_min_score_filters_everything() {
    let dir = indexed_project();

    blockref()
        .current_dir(dir.path())
        .args(["suggest-links", "b1a2c3", "--min-score", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No suggestions for ^b1a2c3"));
}

#[test]
fn test_suggest_limit() {
    let dir = indexed_project();
    write(
        dir.path(),
        "vault/more.md",
        "entanglement again ^e00001\nquantum again ^e00002\n",
    );
    blockref()
        .current_dir(dir.path())
        .arg("index")
        .assert()
        .success();

    let output = blockref()
        .current_dir(dir.path())
        .args(["suggest-links", "b1a2c3", "--min-score=0", "--limit=1"])
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 1);
}

#[test]
fn test_suggest_unknown_source_fails() {
    let dir = indexed_project();

    blockref()
        .current_dir(dir.path())
        .args(["suggest-links", "zzzz99"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("block not found: zzzz99"));
}

#[test]
fn test_suggest_negative_min_score_is_usage_error() {
    let dir = indexed_project();

    blockref()
        .current_dir(dir.path())
        .args(["suggest-links", "b1a2c3", "--min-score=-0.5"])
        .assert()
        .failure()
        .code(1);
}
