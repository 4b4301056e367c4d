use crate::cli::support::{blockref, write};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_stamp_file_adds_markers() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "vault/note.md",
        "# Title\n\nFirst paragraph\n- item one\n",
    );

    blockref()
        .current_dir(dir.path())
        .args(["stamp", "vault/note.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("note.md: 2 stamped"));

    let content = fs::read_to_string(dir.path().join("vault/note.md")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "# Title");
    assert!(lines[2].starts_with("First paragraph ^b"));
    assert!(lines[3].starts_with("- item one ^b"));
}

#[test]
fn test_stamp_is_idempotent() {
    let dir = tempdir().unwrap();
    write(dir.path(), "vault/a.md", "alpha\nbeta\n");
    write(dir.path(), "vault/sub/b.md", "gamma\n");

    blockref()
        .current_dir(dir.path())
        .args(["stamp", "vault"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stamped 3 block(s) in 2 file(s)"));

    let before = fs::read_to_string(dir.path().join("vault/a.md")).unwrap();

    blockref()
        .current_dir(dir.path())
        .args(["stamp", "vault"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stamped 0 block(s)"));

    assert_eq!(fs::read_to_string(dir.path().join("vault/a.md")).unwrap(), before);
}

#[test]
fn test_stamp_skips_fenced_code() {
    let dir = tempdir().unwrap();
    let doc = "```\ncode line ^fake01\nmore code\n```\n";
    write(dir.path(), "vault/code.md", doc);

    blockref()
        .current_dir(dir.path())
        .args(["stamp", "vault"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(dir.path().join("vault/code.md")).unwrap(), doc);
}

#[test]
fn test_stamp_directory_ignores_non_markdown() {
    let dir = tempdir().unwrap();
    write(dir.path(), "vault/readme.txt", "plain text\n");

    blockref()
        .current_dir(dir.path())
        .args(["stamp", "vault"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("vault/readme.txt")).unwrap(),
        "plain text\n"
    );
}

#[test]
fn test_stamp_missing_path_fails() {
    let dir = tempdir().unwrap();

    blockref()
        .current_dir(dir.path())
        .args(["stamp", "nope.md"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}
