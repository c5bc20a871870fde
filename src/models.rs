// src/models.rs

//! Data shapes shared across the crate: the stored [`Command`] record and the
//! menu [`Action`]s.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CmdRefError;

/// A stored shell-command snippet.
///
/// Decoding is lenient: unknown fields are ignored and missing fields default
/// to the empty string.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct Command {
    /// Unique identifier within a collection.
    pub name: String,
    /// The command body. May span several lines.
    pub command: String,
    /// Free-form platform tag, e.g. "mac", "linux" or "windows".
    pub platform: String,
    /// What the command does.
    pub description: String,
}

impl Command {
    /// Builds a command from its four fields.
    pub fn new(
        name: impl Into<String>,
        command: impl Into<String>,
        platform: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            platform: platform.into(),
            description: description.into(),
        }
    }

    /// The label shown in the View picker: `"{platform} - {name}"`.
    pub fn view_label(&self) -> String {
        format!("{} - {}", self.platform, self.name)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}\nDescription: {}\nPlatform: {}\nCommand:\n{}\n",
            self.name, self.description, self.platform, self.command
        )
    }
}

/// Every operation offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Store a new command.
    Create,
    /// Replace the body, platform and description of an existing command.
    Update,
    /// Delete a command after confirmation.
    Remove,
    /// Display a command.
    View,
    /// Load commands from another JSON file.
    Import,
    /// Leave the session.
    Exit,
}

impl Action {
    /// All actions, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Create,
        Self::Update,
        Self::Remove,
        Self::View,
        Self::Import,
        Self::Exit,
    ];

    /// The menu label for this action.
    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Update => "Update",
            Self::Remove => "Remove",
            Self::View => "View",
            Self::Import => "Import",
            Self::Exit => "Exit",
        }
    }

    /// Menu labels for every action, in menu order.
    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|a| a.label().to_string()).collect()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = CmdRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.label() == s)
            .ok_or_else(|| CmdRefError::UnrecognizedAction(s.to_string()))
    }
}
