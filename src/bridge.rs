// src/bridge.rs

//! Read-only access to the raw store file for an embedding frontend.

use std::fs;

use crate::core::store::{CommandStore, StoreError};

/// Returns the store file exactly as it is on disk.
pub fn read_raw(store: &dyn CommandStore) -> Result<String, StoreError> {
    let path = store.file_path();
    fs::read_to_string(&path).map_err(|e| StoreError::Read {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{config::Settings, store::FileStore};
    use crate::models::Command;
    use tempfile::TempDir;

    #[test]
    fn test_read_raw_returns_file_text() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::new(&Settings::with_app_dir(tmp.path()));
        store
            .save(&[Command::new("ls-all", "ls -la", "mac", "list all files")])
            .unwrap();

        let raw = read_raw(&store).unwrap();

        assert_eq!(raw, fs::read_to_string(store.file_path()).unwrap());
        assert!(raw.contains("\"ls-all\""));
    }

    #[test]
    fn test_read_raw_missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(&Settings::with_app_dir(tmp.path()));
        assert!(matches!(read_raw(&store), Err(StoreError::Read { .. })));
    }
}
