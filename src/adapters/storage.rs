use crate::domain::ports::Storage;
use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Filesystem storage rooted at `base_path`; absolute paths bypass the base.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Storage relative to the process working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        fs::read(&full_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConvertError::InputNotFound {
                path: path.to_string(),
            },
            _ => ConvertError::InputUnreadable {
                path: path.to_string(),
                source: e,
            },
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        fs::write(&full_path, data).map_err(|e| ConvertError::WriteError {
            path: path.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_within_base_path() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write_file("report.csv", b"Agent\nAlice\n").unwrap();
        assert_eq!(storage.read_file("report.csv").unwrap(), b"Agent\nAlice\n");
        assert!(dir.path().join("report.csv").exists());
    }

    #[test]
    fn test_missing_input_is_not_found() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage.read_file("Month_to_Date.csv").unwrap_err();
        assert!(matches!(err, ConvertError::InputNotFound { ref path } if path == "Month_to_Date.csv"));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage.write_file("no/such/dir/out.csv", b"x").unwrap_err();
        assert!(matches!(err, ConvertError::WriteError { .. }));
    }
}
