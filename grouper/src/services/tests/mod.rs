//! Service-specific tests
//!
//! Each file-backed service has its own test file; shared helpers live here.


pub mod common {
    use std::path::{Path, PathBuf};

    use tempfile::TempDir;

    /// Write `content` to `name` inside `dir` and return the full path
    pub fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).expect("fixture should be writable");
        path
    }

    pub fn read_to_string(path: &Path) -> String {
        std::fs::read_to_string(path).expect("output should exist")
    }
}
