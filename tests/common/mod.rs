#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A scratch resource directory that is removed when dropped.
pub struct ResDir {
    pub dir: TempDir,
}

impl ResDir {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Writes `contents` to `name` inside the directory and returns its path.
    pub fn file(&self, name: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("reading {}: {}", path.display(), e))
}

/// Shows both texts line by line when they differ.
pub fn assert_same_text(actual: &str, expected: &str) {
    if actual != expected {
        panic!(
            "formatted output differs\n--- got ---\n{}\n--- want ---\n{}",
            actual, expected
        );
    }
}
