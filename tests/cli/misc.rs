use crate::cli::support::blockref;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    blockref()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: blockref"))
        .stdout(predicate::str::contains("suggest-links"));
}

#[test]
fn test_version_flag() {
    blockref()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("blockref"));
}

#[test]
fn test_no_command_prints_banner() {
    blockref()
        .assert()
        .success()
        .stdout(predicate::str::contains("blockref --help"));
}

#[test]
fn test_unknown_command_exits_one() {
    blockref()
        .arg("frobnicate")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_missing_argument_exits_one() {
    blockref().arg("backlinks").assert().failure().code(1);
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempfile::tempdir().unwrap();

    blockref()
        .current_dir(dir.path())
        .args(["-q", "open", "zzzz99"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::is_empty());
}
