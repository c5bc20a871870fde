// src/bin/cmdref.rs

use anyhow::{Context, Result};
use clap::Parser;
use cmdref::{
    bridge,
    cli::{
        Cli, CliCommand,
        handlers::ActionContext,
        prompter::{DialoguerPrompter, PromptError},
        session,
    },
    core::{
        config::Settings,
        store::{CommandStore, FileStore},
    },
    error::CmdRefError,
};
use colored::Colorize;

/// Sets up logging, runs the requested command and reports any error.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        // A dismissed prompt exits like an interrupted shell command.
        if let Some(CmdRefError::Prompt(PromptError::Cancelled)) =
            e.downcast_ref::<CmdRefError>()
        {
            std::process::exit(130);
        }

        eprintln!("\n{}: {:#}", cmdref::t!("common.error").red().bold(), e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);
    log::debug!(
        "Messages compiled for language '{}'",
        env!("CMDREF_LANG_EFFECTIVE")
    );

    let settings = Settings::load(cli.dir).context("Failed to load settings")?;
    let mut store = FileStore::new(&settings);

    match cli.command {
        Some(CliCommand::Path) => {
            println!("{}", store.file_path().display());
        }
        Some(CliCommand::Raw) => {
            print!("{}", bridge::read_raw(&store)?);
        }
        None => {
            let mut prompter = DialoguerPrompter::new();
            let mut ctx = ActionContext::new(&mut prompter, &mut store, &settings);
            session::run(&mut ctx)?;
            println!("{}", cmdref::t!("session.info.goodbye").dimmed());
        }
    }
    Ok(())
}
