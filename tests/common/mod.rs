#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

// Same stream builder the unit tests use
#[path = "../../src/ogg/fixtures.rs"]
mod fixtures;

pub use fixtures::*;

pub fn write_file(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, data).unwrap();
    path
}
