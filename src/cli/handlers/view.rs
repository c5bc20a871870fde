// src/cli/handlers/view.rs

use super::{ActionContext, ActionOutcome, commons};
use crate::{
    core::collection::{self, CommandMap},
    error::CmdRefResult,
};

/// Lets the user pick a command by `"{platform} - {name}"` and prints it.
/// Never modifies the map.
pub fn handle(map: &CommandMap, ctx: &mut ActionContext<'_>) -> CmdRefResult<ActionOutcome> {
    show(map, ctx)?;
    Ok(ActionOutcome::new(map.clone()))
}

fn show(map: &CommandMap, ctx: &mut ActionContext<'_>) -> CmdRefResult<()> {
    if map.is_empty() {
        commons::print_empty_notice(t!("view.info.empty"));
        return Ok(());
    }

    let entries = collection::view_entries(map);
    let labels: Vec<String> = entries.iter().map(|(label, _)| label.clone()).collect();
    let selected = ctx.prompter.select(t!("view.prompt.select"), &labels)?;

    let cmd = entries
        .iter()
        .find(|(label, _)| *label == selected)
        .and_then(|(_, name)| map.get(name));
    if let Some(cmd) = cmd {
        commons::print_record(cmd, ctx.settings);
    }
    Ok(())
}
