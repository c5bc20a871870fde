// src/cli/handlers/commons.rs

// Prompt sequences and output shared by several handlers.

use colored::Colorize;

use crate::{
    cli::prompter::{PromptResult, Prompter},
    core::config::Settings,
    models::Command,
};

/// Asks for a new command's name followed by its other fields.
pub fn prompt_new_command(prompter: &mut dyn Prompter) -> PromptResult<Command> {
    let name = prompter.input(t!("create.prompt.name"))?;
    prompt_command_with_name(prompter, name)
}

/// Asks for the body, platform and description of a command whose name is
/// already known.
pub fn prompt_command_with_name(
    prompter: &mut dyn Prompter,
    name: String,
) -> PromptResult<Command> {
    let command = prompter.input(t!("create.prompt.command"))?;
    let platform = prompter.input(t!("create.prompt.platform"))?;
    let description = prompter.input(t!("create.prompt.description"))?;
    Ok(Command {
        name,
        command,
        platform,
        description,
    })
}

/// Prints a record with its platform and command body highlighted.
pub fn print_record(cmd: &Command, settings: &Settings) {
    println!();
    println!("  {:<14} {}", t!("record.label.name").blue(), cmd.name.bold());
    println!("  {:<14} {}", t!("record.label.description").blue(), cmd.description);
    println!("  {:<14} {}", t!("record.label.platform").blue(), cmd.platform.cyan());
    println!("  {}", t!("record.label.command").blue());
    for line in cmd.command.lines() {
        println!("    {}", line.color(settings.highlight()));
    }
    println!();
}

/// Prints the notice shown when an action has nothing to work on.
pub fn print_empty_notice(message: &str) {
    println!("{}", message.dimmed());
}
