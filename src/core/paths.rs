// src/core/paths.rs

use crate::constants::{CMD_DIR_NAME, CMD_FILE_NAME, CONFIG_FILE_NAME};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    #[error("Could not create application directory at '{path}': {source}")]
    AppDirCreation {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Returns the default application directory (`~/.config/cmdref` on Linux).
/// Does not touch the filesystem.
pub fn default_app_dir() -> Result<PathBuf, PathError> {
    dirs::config_dir()
        .map(|dir| dir.join(CMD_DIR_NAME))
        .ok_or(PathError::ConfigDirNotFound)
}

/// Resolves the application directory, preferring an explicit override, and
/// creates it if it doesn't exist.
pub fn resolve_app_dir(dir_override: Option<PathBuf>) -> Result<PathBuf, PathError> {
    let app_dir = match dir_override {
        Some(dir) => dir,
        None => default_app_dir()?,
    };
    ensure_dir(&app_dir)?;
    Ok(app_dir)
}

/// Creates `path` and all missing parents.
pub fn ensure_dir(path: &Path) -> Result<(), PathError> {
    if path.is_dir() {
        return Ok(());
    }
    log::debug!("Creating directory '{}'", path.display());
    fs::create_dir_all(path).map_err(|e| PathError::AppDirCreation {
        path: path.display().to_string(),
        source: e,
    })
}

/// Path of the canonical store file inside `app_dir`.
pub fn store_file_path(app_dir: &Path) -> PathBuf {
    app_dir.join(CMD_FILE_NAME)
}

/// Path of the settings file inside `app_dir`.
pub fn config_file_path(app_dir: &Path) -> PathBuf {
    app_dir.join(CONFIG_FILE_NAME)
}

/// Expands a user-typed path: surrounding whitespace and quotes are dropped and
/// a leading `~` is replaced by the home directory.
pub fn expand_user_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim().trim_matches(|c| c == '"' || c == '\'');
    PathBuf::from(shellexpand::tilde(trimmed).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_app_dir_creates_override() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("nested").join("cmdref");

        let resolved = resolve_app_dir(Some(target.clone())).unwrap();

        assert_eq!(resolved, target);
        assert!(target.is_dir());
    }

    #[test]
    fn test_file_paths_use_fixed_names() {
        let dir = Path::new("/tmp/app");
        assert_eq!(store_file_path(dir), dir.join("cmdref.json"));
        assert_eq!(config_file_path(dir), dir.join("config.toml"));
    }

    #[test]
    fn test_expand_user_path_strips_quotes_and_tilde() {
        let expanded = expand_user_path("  \"/srv/cmds.json\" ");
        assert_eq!(expanded, PathBuf::from("/srv/cmds.json"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_user_path("~/cmds.json"), home.join("cmds.json"));
        }
    }
}
