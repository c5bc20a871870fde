// src/cli/handlers/delete.rs

use super::{ActionContext, ActionOutcome, commons};
use crate::{
    core::collection::{self, CommandMap},
    error::CmdRefResult,
};

/// Lets the user pick a command and removes it after confirmation. The
/// removal notice is left in the outcome for the caller to show after saving.
pub fn handle(map: &CommandMap, ctx: &mut ActionContext<'_>) -> CmdRefResult<ActionOutcome> {
    if map.is_empty() {
        commons::print_empty_notice(t!("delete.info.empty"));
        return Ok(ActionOutcome::new(map.clone()));
    }

    // 1. Pick and show the command.
    let names = collection::names(map);
    let selection = ctx.prompter.select(t!("delete.prompt.select"), &names)?;
    if let Some(current) = map.get(&selection) {
        commons::print_record(current, ctx.settings);
    }

    // 2. Confirm.
    let prompt = format!(t!("delete.prompt.are_you_sure"), name = selection);
    let confirmed = ctx
        .prompter
        .confirm(&prompt, ctx.settings.confirm_delete_default())?;

    let mut new_map = map.clone();
    if !confirmed {
        println!("{}", t!("common.info.operation_cancelled"));
        return Ok(ActionOutcome::new(new_map));
    }

    // 3. Remove from the working copy.
    if let Some(removed) = new_map.remove(&selection) {
        log::debug!("Removed command:\n{}", removed);
    }
    let notice = format!(t!("delete.success.removed"), name = selection);
    Ok(ActionOutcome::new(new_map).with_notice(notice))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::handlers::test_support::*;
    use crate::cli::prompter::Answer;
    use crate::core::store::MemoryStore;

    #[test]
    fn test_delete_confirmed_removes_selected() {
        let map = sample_map();
        let mut prompter = script(vec![select("ports"), Answer::Confirm(true)]);
        let mut store = MemoryStore::new();
        let settings = settings();
        let mut ctx = ActionContext::new(&mut prompter, &mut store, &settings);

        let outcome = handle(&map, &mut ctx).unwrap();

        assert_eq!(outcome.map.len(), map.len() - 1);
        assert!(!outcome.map.contains_key("ports"));
        assert!(map.contains_key("ports"));
        assert_eq!(
            outcome.notice,
            Some(format!(t!("delete.success.removed"), name = "ports"))
        );
        let expected = format!(t!("delete.prompt.are_you_sure"), name = "ports");
        assert_eq!(prompter.asked().get(1), Some(&expected));
    }

    #[test]
    fn test_delete_declined_returns_equal_map() {
        let map = sample_map();
        let mut prompter = script(vec![select("ports"), Answer::Confirm(false)]);
        let mut store = MemoryStore::new();
        let settings = settings();
        let mut ctx = ActionContext::new(&mut prompter, &mut store, &settings);

        let outcome = handle(&map, &mut ctx).unwrap();

        assert_eq!(outcome.map, map);
        assert_eq!(outcome.notice, None);
    }

    #[test]
    fn test_delete_empty_map_is_noop() {
        let map = CommandMap::new();
        let mut prompter = script(vec![]);
        let mut store = MemoryStore::new();
        let settings = settings();
        let mut ctx = ActionContext::new(&mut prompter, &mut store, &settings);

        assert!(handle(&map, &mut ctx).unwrap().map.is_empty());
        assert!(prompter.asked().is_empty());
    }
}
