// src/cli/handlers/create.rs

use super::{ActionContext, ActionOutcome, commons};
use crate::{core::collection::CommandMap, error::CmdRefResult};

/// Prompts for a new command and returns a copy of `map` holding it. An
/// existing command with the same name is silently replaced.
pub fn handle(map: &CommandMap, ctx: &mut ActionContext<'_>) -> CmdRefResult<ActionOutcome> {
    let cmd = commons::prompt_new_command(&mut *ctx.prompter)?;

    if map.contains_key(&cmd.name) {
        log::debug!("Create replaces existing command '{}'", cmd.name);
    }

    let mut new_map = map.clone();
    new_map.insert(cmd.name.clone(), cmd);
    Ok(ActionOutcome::new(new_map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::handlers::test_support::*;
    use crate::cli::prompter::PromptError;
    use crate::core::store::MemoryStore;
    use crate::error::CmdRefError;
    use crate::models::Command;

    #[test]
    fn test_create_adds_new_command() {
        let map = sample_map();
        let mut prompter = script(vec![
            input("grep-r"),
            input("grep -rn pattern ."),
            input("linux"),
            input("recursive search"),
        ]);
        let mut store = MemoryStore::new();
        let settings = settings();
        let mut ctx = ActionContext::new(&mut prompter, &mut store, &settings);

        let outcome = handle(&map, &mut ctx).unwrap();
        let new_map = outcome.map;

        assert_eq!(new_map.len(), map.len() + 1);
        assert_eq!(
            new_map["grep-r"],
            Command::new("grep-r", "grep -rn pattern .", "linux", "recursive search")
        );
        for (name, cmd) in &map {
            assert_eq!(&new_map[name], cmd);
        }
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_create_with_existing_name_replaces_entry() {
        let map = sample_map();
        let mut prompter = script(vec![
            input("ls-all"),
            input("ls -lah"),
            input("linux"),
            input("human sizes"),
        ]);
        let mut store = MemoryStore::new();
        let settings = settings();
        let mut ctx = ActionContext::new(&mut prompter, &mut store, &settings);

        let outcome = handle(&map, &mut ctx).unwrap();

        assert_eq!(outcome.map.len(), map.len());
        assert_eq!(outcome.map["ls-all"].command, "ls -lah");
        assert_eq!(map["ls-all"].command, "ls -la");
        assert_eq!(outcome.notice, None);
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_create_propagates_closed_input() {
        let map = sample_map();
        let mut prompter = script(vec![input("half-done"), input("echo")]);
        let mut store = MemoryStore::new();
        let settings = settings();
        let mut ctx = ActionContext::new(&mut prompter, &mut store, &settings);

        let err = handle(&map, &mut ctx).unwrap_err();

        assert!(matches!(err, CmdRefError::Prompt(PromptError::Exhausted { .. })));
    }
}
