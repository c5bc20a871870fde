// src/cli/args.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::HOME_ENV_VAR;

/// cmdref: a personal reference for the shell commands you keep forgetting.
///
/// Run without a subcommand to open the interactive menu.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Directory holding cmdref.json and config.toml. Defaults to the system config dir.
    #[arg(long, global = true, env = HOME_ENV_VAR, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the absolute path of the commands file.
    Path,
    /// Print the raw contents of the commands file.
    Raw,
}
