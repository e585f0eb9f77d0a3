//! File system operations (read, write, probe).

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self, contents))]
    pub(crate) fn write_impl(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents).context("Failed to write to file")?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn read_to_string_impl(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context("Failed to read file to string")
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn exists_impl(&self, path: &Path) -> bool {
        path.exists()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn is_dir_impl(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_write_and_read() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let path = dir.path().join("file.txt");

        runtime.write(&path, b"hello").unwrap();
        assert!(runtime.exists(&path));
        assert!(!runtime.is_dir(&path));
        assert!(runtime.is_dir(dir.path()));
        assert_eq!(runtime.read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_real_runtime_read_missing_file_fails() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        assert!(!runtime.exists(&path));
        assert!(runtime.read_to_string(&path).is_err());
    }
}
