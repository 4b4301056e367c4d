use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Get a Command for blockref
pub fn blockref() -> Command {
    cargo_bin_cmd!("blockref")
}

/// Write a file under `root`, creating parent directories
pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

pub const PHYSICS: &str = "\
# Physics ^h00001
- quantum entanglement experiments ^b1a2c3
- see ((^b9f8e7)) and [[nested/locality#^gone00]] ^c00001
";

pub const LOCALITY: &str = "\
# Locality
entanglement violates locality ^b9f8e7
Builds on ((^b1a2c3)) ^c00002
gardening tomatoes in summer ^d00001
";

/// Initialized project with two vault files, already indexed
pub fn indexed_project() -> TempDir {
    let dir = tempdir().unwrap();
    blockref()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    write(dir.path(), "vault/physics.md", PHYSICS);
    write(dir.path(), "vault/nested/locality.md", LOCALITY);
    blockref()
        .current_dir(dir.path())
        .arg("index")
        .assert()
        .success();
    dir
}
