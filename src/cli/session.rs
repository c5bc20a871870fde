// src/cli/session.rs

use colored::Colorize;

use crate::{
    cli::{dispatcher, handlers::ActionContext},
    core::collection::{self, CommandMap},
    error::{CmdRefError, CmdRefResult},
    models::Action,
};

/// Runs the interactive menu until the user picks `Exit`.
///
/// Store errors (an unreadable import file, a failed save) are reported and
/// the session continues with the previous map. Prompt failures end the
/// session. Returns the final map.
pub fn run(ctx: &mut ActionContext<'_>) -> CmdRefResult<CommandMap> {
    let mut map = collection::load_commands(&*ctx.store)?;
    log::debug!("Session started with {} command(s)", map.len());

    loop {
        let action = dispatcher::select_action(&mut *ctx.prompter)?;
        if action == Action::Exit {
            break;
        }

        match dispatcher::process_action(&map, action, ctx) {
            Ok(outcome) => {
                // Only reached once any save has gone through.
                if let Some(notice) = &outcome.notice {
                    println!("{} {}", t!("common.success").green().bold(), notice);
                }
                map = outcome.map;
            }
            Err(CmdRefError::Store(e)) => {
                log::warn!("{} failed: {}", action, e);
                eprintln!(
                    "{}: {}\n{}",
                    t!("common.error").red().bold(),
                    e,
                    t!("session.info.nothing_changed").dimmed()
                );
            }
            Err(e) => return Err(e),
        }
    }

    log::debug!("Session ended with {} command(s)", map.len());
    Ok(map)
}
