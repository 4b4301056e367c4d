use crate::cli::support::blockref;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_init_creates_project() {
    let dir = tempdir().unwrap();

    blockref()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    assert!(dir.path().join(".blockref/config.toml").is_file());
    assert!(dir.path().join(".blockref/index.db").is_file());
    assert!(dir.path().join("vault").is_dir());
}

#[test]
fn test_init_is_idempotent() {
    let dir = tempdir().unwrap();

    blockref()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    let config = dir.path().join(".blockref/config.toml");
    fs::write(&config, "vault_dir = \"vault\"\neditor = \"nano\"\n").unwrap();

    blockref()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created").not());

    assert_eq!(
        fs::read_to_string(&config).unwrap(),
        "vault_dir = \"vault\"\neditor = \"nano\"\n"
    );
}

#[test]
fn test_init_creates_schema() {
    let dir = tempdir().unwrap();

    blockref()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    let conn = rusqlite::Connection::open(dir.path().join(".blockref/index.db")).unwrap();
    let tables: Vec<String> = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert!(tables.contains(&"blocks".to_string()));
    assert!(tables.contains(&"refs".to_string()));
    assert!(tables.contains(&"index_meta".to_string()));
}

#[test]
fn test_init_with_root_flag() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("project");
    fs::create_dir(&project).unwrap();

    blockref()
        .arg("--root")
        .arg(&project)
        .arg("init")
        .assert()
        .success();

    assert!(project.join(".blockref/config.toml").is_file());
}
