// src/core/store.rs

//! The file operations boundary: loading and saving the canonical commands
//! file and reading external files for import.

use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::core::config::Settings;
use crate::core::paths;
use crate::models::Command;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{path}' is not a valid commands file: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

type StoreResult<T> = Result<T, StoreError>;

/// Everything the action layer needs from persistent storage.
pub trait CommandStore {
    /// Reads the canonical commands file. A missing or empty file yields no commands.
    fn load(&self) -> StoreResult<Vec<Command>>;

    /// Reads a commands file at an arbitrary path.
    fn load_external(&self, path: &Path) -> StoreResult<Vec<Command>>;

    /// Overwrites the canonical commands file with `commands`.
    fn save(&mut self, commands: &[Command]) -> StoreResult<()>;

    /// Absolute path of the canonical commands file.
    fn file_path(&self) -> PathBuf;
}

/// Parses a JSON array of commands. `null` is read as an empty list.
pub fn parse_commands(bytes: &[u8], origin: &Path) -> StoreResult<Vec<Command>> {
    let commands: Option<Vec<Command>> =
        serde_json::from_slice(bytes).map_err(|e| StoreError::Parse {
            path: origin.display().to_string(),
            source: e,
        })?;
    Ok(commands.unwrap_or_default())
}

/// Parses the canonical store, where blank content means "no commands yet".
fn parse_store_contents(bytes: &[u8], origin: &Path) -> StoreResult<Vec<Command>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    parse_commands(bytes, origin)
}

// --- Live implementation ---

/// Filesystem-backed store rooted in the application directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    app_dir: PathBuf,
    path: PathBuf,
}

impl FileStore {
    pub fn new(settings: &Settings) -> Self {
        Self {
            app_dir: settings.app_dir().to_path_buf(),
            path: settings.store_path(),
        }
    }
}

impl CommandStore for FileStore {
    fn load(&self) -> StoreResult<Vec<Command>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!(
                    "No commands file at '{}' yet, starting empty",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.display().to_string(),
                    source: e,
                });
            }
        };
        let commands = parse_store_contents(&bytes, &self.path)?;
        log::debug!(
            "Loaded {} command(s) from '{}'",
            commands.len(),
            self.path.display()
        );
        Ok(commands)
    }

    fn load_external(&self, path: &Path) -> StoreResult<Vec<Command>> {
        let bytes = fs::read(path).map_err(|e| StoreError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let commands = parse_commands(&bytes, path)?;
        log::debug!(
            "Loaded {} command(s) from external file '{}'",
            commands.len(),
            path.display()
        );
        Ok(commands)
    }

    fn save(&mut self, commands: &[Command]) -> StoreResult<()> {
        let write_err = |source: std::io::Error| StoreError::Write {
            path: self.path.display().to_string(),
            source,
        };

        paths::ensure_dir(&self.app_dir).map_err(|e| match e {
            paths::PathError::AppDirCreation { source, .. } => write_err(source),
            other => write_err(std::io::Error::other(other.to_string())),
        })?;

        let json = serde_json::to_vec_pretty(commands).map_err(|e| write_err(e.into()))?;

        // Write next to the target and rename over it, so a failure never
        // leaves a truncated store behind.
        let mut tmp = NamedTempFile::new_in(&self.app_dir).map_err(write_err)?;
        tmp.write_all(&json).map_err(write_err)?;
        // The temp file starts out owner-only; keep the store's current mode.
        if let Ok(existing) = fs::metadata(&self.path) {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(write_err)?;
        }
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;

        log::debug!(
            "Saved {} command(s) to '{}'",
            commands.len(),
            self.path.display()
        );
        Ok(())
    }

    fn file_path(&self) -> PathBuf {
        self.path.clone()
    }
}

// --- In-memory implementation ---

/// In-memory store for tests and dry runs. External files are served from a
/// table of raw JSON contents keyed by path.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    commands: Vec<Command>,
    external: HashMap<PathBuf, String>,
    fail_saves: bool,
    save_count: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose canonical file already holds `commands`.
    pub fn with_commands(commands: Vec<Command>) -> Self {
        Self {
            commands,
            ..Self::default()
        }
    }

    /// Registers the raw contents of an external file.
    pub fn add_external(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.external.insert(path.into(), contents.into());
    }

    /// Makes every subsequent `save` fail with a write error.
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// The commands as last saved (or as seeded).
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// How many saves succeeded.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl CommandStore for MemoryStore {
    fn load(&self) -> StoreResult<Vec<Command>> {
        Ok(self.commands.clone())
    }

    fn load_external(&self, path: &Path) -> StoreResult<Vec<Command>> {
        let contents = self.external.get(path).ok_or_else(|| StoreError::Read {
            path: path.display().to_string(),
            source: std::io::Error::new(ErrorKind::NotFound, "no such file"),
        })?;
        parse_commands(contents.as_bytes(), path)
    }

    fn save(&mut self, commands: &[Command]) -> StoreResult<()> {
        if self.fail_saves {
            return Err(StoreError::Write {
                path: self.file_path().display().to_string(),
                source: std::io::Error::new(ErrorKind::PermissionDenied, "saves disabled"),
            });
        }
        self.commands = commands.to_vec();
        self.save_count += 1;
        Ok(())
    }

    fn file_path(&self) -> PathBuf {
        PathBuf::from("memory").join(crate::constants::CMD_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn sample() -> Vec<Command> {
        vec![
            Command::new("ls-all", "ls -la", "mac", "list all files"),
            Command::new("disk", "df -h\ndu -sh .", "linux", "disk usage"),
        ]
    }

    fn file_store(tmp: &TempDir) -> FileStore {
        FileStore::new(&Settings::with_app_dir(tmp.path().join("cmdref")))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let store = file_store(&tmp);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_blank_or_null_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let store = file_store(&tmp);
        fs::create_dir_all(tmp.path().join("cmdref")).unwrap();

        fs::write(store.file_path(), "  \n").unwrap();
        assert!(store.load().unwrap().is_empty());

        fs::write(store.file_path(), "null").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let store = file_store(&tmp);
        fs::create_dir_all(tmp.path().join("cmdref")).unwrap();
        fs::write(store.file_path(), "[{\"name\": ").unwrap();

        assert!(matches!(store.load(), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let mut store = file_store(&tmp);

        store.save(&sample()).unwrap();
        let first: HashSet<Command> = store.load().unwrap().into_iter().collect();
        store.save(&first.iter().cloned().collect::<Vec<_>>()).unwrap();
        let second: HashSet<Command> = store.load().unwrap().into_iter().collect();

        assert_eq!(first, sample().into_iter().collect());
        assert_eq!(first, second);
    }

    #[test]
    fn test_save_writes_json_array_with_field_names() {
        let tmp = TempDir::new().unwrap();
        let mut store = file_store(&tmp);
        store
            .save(&[Command::new("ls-all", "ls -la", "mac", "list all files")])
            .unwrap();

        let raw = fs::read_to_string(store.file_path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "name": "ls-all",
                "command": "ls -la",
                "platform": "mac",
                "description": "list all files"
            }])
        );
    }

    #[test]
    fn test_failed_save_leaves_store_file_intact() {
        let tmp = TempDir::new().unwrap();
        let mut store = file_store(&tmp);
        store.save(&sample()).unwrap();
        let before = fs::read(store.file_path()).unwrap();

        // An app dir that is an existing regular file cannot hold the store.
        let mut blocked = FileStore::new(&Settings::with_app_dir(store.file_path()));
        let result = blocked.save(&[]);

        assert!(matches!(result, Err(StoreError::Write { .. })));
        assert_eq!(fs::read(store.file_path()).unwrap(), before);
        assert_eq!(store.load().unwrap(), sample());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_existing_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let mut store = file_store(&tmp);
        store.save(&sample()).unwrap();
        let readable = fs::Permissions::from_mode(0o644);
        fs::set_permissions(store.file_path(), readable).unwrap();

        store
            .save(&[Command::new("ls-all", "ls -la", "mac", "list all files")])
            .unwrap();

        let mode = fs::metadata(store.file_path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_load_external_missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let store = file_store(&tmp);
        let result = store.load_external(&tmp.path().join("nope.json"));
        assert!(matches!(result, Err(StoreError::Read { .. })));
    }

    #[test]
    fn test_load_external_empty_file_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let store = file_store(&tmp);
        let path = tmp.path().join("empty.json");
        fs::write(&path, "").unwrap();

        assert!(matches!(
            store.load_external(&path),
            Err(StoreError::Parse { .. })
        ));
    }

    #[test]
    fn test_memory_store_failing_save_keeps_contents() {
        let mut store = MemoryStore::with_commands(sample());
        store.fail_saves(true);

        let result = store.save(&[]);

        assert!(matches!(result, Err(StoreError::Write { .. })));
        assert_eq!(store.commands(), sample().as_slice());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_memory_store_serves_external_files() {
        let mut store = MemoryStore::new();
        store.add_external(
            "/imports/a.json",
            r#"[{"name":"x","command":"echo x","platform":"linux","description":"d"}]"#,
        );
        store.add_external("/imports/bad.json", "{not json");

        let loaded = store.load_external(Path::new("/imports/a.json")).unwrap();
        assert_eq!(loaded, vec![Command::new("x", "echo x", "linux", "d")]);
        assert!(matches!(
            store.load_external(Path::new("/imports/bad.json")),
            Err(StoreError::Parse { .. })
        ));
        assert!(matches!(
            store.load_external(Path::new("/imports/missing.json")),
            Err(StoreError::Read { .. })
        ));
    }
}
