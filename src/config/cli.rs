use crate::core::Storage;
use crate::utils::error::{PortfolioError, Result};
use std::fs;
use std::path::Path;

/// Files on local disk, resolved against a base directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn resolve(&self, path: &str) -> String {
        Path::new(&self.base_path).join(path).display().to_string()
    }
}

impl Storage for LocalStorage {
    /// Overwrites the target in place; no temp file, no backup.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);
        let write_err = |source| PortfolioError::OutputWriteError {
            path: full_path.display().to_string(),
            source,
        };

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        fs::write(&full_path, data).map_err(write_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_overwrites_and_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage.write_file("site/index.html", b"first version, longer").unwrap();
        storage.write_file("site/index.html", b"second").unwrap();

        let written = fs::read(temp_dir.path().join("site/index.html")).unwrap();
        assert_eq!(written, b"second");
    }

    #[test]
    fn test_write_into_a_file_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, b"not a directory").unwrap();

        let storage = LocalStorage::new(blocker.to_str().unwrap().to_string());
        let err = storage.write_file("index.html", b"<html>").unwrap_err();
        assert!(matches!(err, PortfolioError::OutputWriteError { .. }));
    }
}
