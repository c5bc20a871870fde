// src/core/config.rs

//! Process-wide settings, resolved once in `main` and passed down explicitly.

use colored::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::{color, paths};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Path error: {0}")]
    Path(#[from] paths::PathError),
    #[error("Could not access settings file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid settings file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Unknown highlight color '{0}'.")]
    UnknownColor(String),
}

/// On-disk shape of `config.toml`. Every field is optional.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ConfigFile {
    pub display: DisplayConfig,
    pub prompts: PromptConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Color used for the command body when a record is shown.
    pub highlight: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            highlight: "yellow".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PromptConfig {
    /// Pre-selected answer of the delete confirmation.
    pub confirm_delete_default: bool,
    /// Pre-selected answer of the "merge with existing commands?" question.
    pub merge_default: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            confirm_delete_default: false,
            merge_default: true,
        }
    }
}

/// Resolved settings for one process.
#[derive(Debug, Clone)]
pub struct Settings {
    app_dir: PathBuf,
    highlight: Color,
    confirm_delete_default: bool,
    merge_default: bool,
}

impl Settings {
    /// Resolves the application directory (creating it if needed) and reads
    /// `config.toml` from it, writing a default one when absent.
    pub fn load(dir_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        let app_dir = paths::resolve_app_dir(dir_override)?;
        let file = load_or_init_config_file(&paths::config_file_path(&app_dir))?;
        Self::from_config_file(app_dir, &file)
    }

    /// Builds settings from an already parsed config file. Performs no I/O.
    pub fn from_config_file(app_dir: PathBuf, file: &ConfigFile) -> Result<Self, ConfigError> {
        let highlight = color::parse_color_name(&file.display.highlight)
            .ok_or_else(|| ConfigError::UnknownColor(file.display.highlight.clone()))?;
        Ok(Self {
            app_dir,
            highlight,
            confirm_delete_default: file.prompts.confirm_delete_default,
            merge_default: file.prompts.merge_default,
        })
    }

    /// Default settings rooted at `app_dir`. Performs no I/O.
    pub fn with_app_dir(app_dir: impl Into<PathBuf>) -> Self {
        let defaults = ConfigFile::default();
        Self {
            app_dir: app_dir.into(),
            highlight: Color::Yellow,
            confirm_delete_default: defaults.prompts.confirm_delete_default,
            merge_default: defaults.prompts.merge_default,
        }
    }

    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    /// Absolute path of the canonical store file.
    pub fn store_path(&self) -> PathBuf {
        paths::store_file_path(&self.app_dir)
    }

    pub fn highlight(&self) -> Color {
        self.highlight
    }

    pub fn confirm_delete_default(&self) -> bool {
        self.confirm_delete_default
    }

    pub fn merge_default(&self) -> bool {
        self.merge_default
    }
}

fn load_or_init_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    if !path.exists() {
        log::warn!(
            "Settings file not found. Writing defaults to '{}'.",
            path.display()
        );
        let defaults = ConfigFile::default();
        let toml_string = toml::to_string_pretty(&defaults)?;
        fs::write(path, toml_string).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        return Ok(defaults);
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}
