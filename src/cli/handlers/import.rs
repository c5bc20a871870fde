// src/cli/handlers/import.rs

use std::path::Path;

use super::{ActionContext, ActionOutcome};
use crate::{
    core::{
        collection::{self, CommandMap},
        paths,
        store::{CommandStore, StoreError},
    },
    error::CmdRefResult,
};

/// Asks for a file path and whether to merge, then imports it.
pub fn handle(map: &CommandMap, ctx: &mut ActionContext<'_>) -> CmdRefResult<ActionOutcome> {
    let raw_path = ctx.prompter.input(t!("import.prompt.path"))?;
    let path = paths::expand_user_path(&raw_path);
    let merge = ctx
        .prompter
        .confirm(t!("import.prompt.merge"), ctx.settings.merge_default())?;

    let new_map = import(&path, merge, map, &*ctx.store)?;

    let count = new_map.len();
    let notice = if merge {
        format!(t!("import.success.merged"), path = path.display(), count = count)
    } else {
        format!(t!("import.success.replaced"), path = path.display(), count = count)
    };
    Ok(ActionOutcome::new(new_map).with_notice(notice))
}

/// Loads the commands in `path` and either merges them into a copy of `map`
/// (imported entries win on name collisions) or returns a map holding only
/// the imported commands. `map` is left untouched, also on error.
pub fn import(
    path: &Path,
    merge: bool,
    map: &CommandMap,
    store: &dyn CommandStore,
) -> Result<CommandMap, StoreError> {
    let incoming = store.load_external(path)?;
    log::debug!(
        "Importing {} command(s) from '{}' (merge: {})",
        incoming.len(),
        path.display(),
        merge
    );
    if merge {
        Ok(collection::merge(map, incoming))
    } else {
        Ok(collection::from_commands(incoming))
    }
}
