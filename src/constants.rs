// src/constants.rs

//! Fixed names used to locate cmdref's files.

/// The name of the application directory inside the system config dir (`~/.config/cmdref`).
pub const CMD_DIR_NAME: &str = "cmdref";

/// The name of the canonical store file (inside the application directory).
pub const CMD_FILE_NAME: &str = "cmdref.json";

/// The name of the optional settings file (inside the application directory).
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable that overrides the application directory.
pub const HOME_ENV_VAR: &str = "CMDREF_HOME";
