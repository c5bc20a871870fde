// src/cli/handlers/update.rs

use super::{ActionContext, ActionOutcome, commons};
use crate::{
    core::collection::{self, CommandMap},
    error::CmdRefResult,
};

/// Lets the user pick a command, shows it, then asks for its new body,
/// platform and description. The name is kept.
pub fn handle(map: &CommandMap, ctx: &mut ActionContext<'_>) -> CmdRefResult<ActionOutcome> {
    if map.is_empty() {
        commons::print_empty_notice(t!("update.info.empty"));
        return Ok(ActionOutcome::new(map.clone()));
    }

    // 1. Pick the command to update.
    let names = collection::names(map);
    let selection = ctx.prompter.select(t!("update.prompt.select"), &names)?;
    if let Some(current) = map.get(&selection) {
        commons::print_record(current, ctx.settings);
    }

    // 2. Ask for the replacement fields under the same name.
    let updated = commons::prompt_command_with_name(&mut *ctx.prompter, selection.clone())?;
    log::debug!("Updating command '{}'", selection);

    let mut new_map = map.clone();
    new_map.insert(selection, updated);
    Ok(ActionOutcome::new(new_map))
}
