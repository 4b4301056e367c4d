use crate::cli::support::{blockref, indexed_project, write};
use predicates::prelude::*;
use tempfile::tempdir;

fn counts(root: &std::path::Path) -> (i64, i64) {
    let conn = rusqlite::Connection::open(root.join(".blockref/index.db")).unwrap();
    let blocks = conn
        .query_row("SELECT COUNT(*) FROM blocks", [], |row| row.get(0))
        .unwrap();
    let refs = conn
        .query_row("SELECT COUNT(*) FROM refs", [], |row| row.get(0))
        .unwrap();
    (blocks, refs)
}

#[test]
fn test_index_reports_counts() {
    let dir = indexed_project();

    blockref()
        .current_dir(dir.path())
        .arg("index")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Indexed 6 block(s) from 2 file(s), 3 reference(s)",
        ));
}

#[test]
fn test_index_twice_is_stable() {
    let dir = indexed_project();
    let first = counts(dir.path());

    blockref()
        .current_dir(dir.path())
        .arg("index")
        .assert()
        .success();

    assert_eq!(counts(dir.path()), first);
    assert_eq!(first, (6, 3));
}

#[test]
fn test_index_replaces_removed_blocks() {
    let dir = indexed_project();
    write(dir.path(), "vault/nested/locality.md", "only one ^e00001\n");

    blockref()
        .current_dir(dir.path())
        .arg("index")
        .assert()
        .success();

    assert_eq!(counts(dir.path()), (4, 2));
}

#[test]
fn test_index_reports_collisions() {
    let dir = tempdir().unwrap();
    write(dir.path(), "vault/a.md", "first ^dup001\n");
    write(dir.path(), "vault/b.md", "second ^dup001\n");

    blockref()
        .current_dir(dir.path())
        .arg("index")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 duplicate identifier(s)"));
}

#[test]
fn test_index_missing_vault_fails() {
    let dir = tempdir().unwrap();

    blockref()
        .current_dir(dir.path())
        .arg("index")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("vault directory not found"));
}

#[test]
fn test_index_unreadable_file_aborts() {
    let dir = indexed_project();
    std::fs::write(dir.path().join("vault/bad.md"), [0xff, 0xfe, 0x00]).unwrap();

    blockref()
        .current_dir(dir.path())
        .arg("index")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.md"));

    // Previous index survives
    assert_eq!(counts(dir.path()), (6, 3));
}
