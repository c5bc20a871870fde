// src/cli/dispatcher.rs

use crate::{
    cli::{
        handlers::{self, ActionContext, ActionOutcome},
        prompter::Prompter,
    },
    core::collection::{self, CommandMap},
    error::{CmdRefError, CmdRefResult},
    models::Action,
};

/// Binds a menu action to its handler.
struct ActionDefinition {
    action: Action,
    /// Whether the handler's result is written back to the store.
    persists: bool,
    handler: fn(&CommandMap, &mut ActionContext<'_>) -> CmdRefResult<ActionOutcome>,
}

/// Every action the dispatcher handles. `Exit` has no entry: the
/// session loop stops before dispatching it.
static ACTION_REGISTRY: &[ActionDefinition] = &[
    ActionDefinition {
        action: Action::Create,
        persists: true,
        handler: handlers::create::handle,
    },
    ActionDefinition {
        action: Action::Update,
        persists: true,
        handler: handlers::update::handle,
    },
    ActionDefinition {
        action: Action::Remove,
        persists: true,
        handler: handlers::delete::handle,
    },
    ActionDefinition {
        action: Action::View,
        persists: false,
        handler: handlers::view::handle,
    },
    ActionDefinition {
        action: Action::Import,
        persists: true,
        handler: handlers::import::handle,
    },
];

fn find_action(action: Action) -> Option<&'static ActionDefinition> {
    ACTION_REGISTRY.iter().find(|def| def.action == action)
}

/// Asks which action to run next.
pub fn select_action(prompter: &mut dyn Prompter) -> CmdRefResult<Action> {
    let label = prompter.select(t!("session.prompt.action"), &Action::labels())?;
    label.parse()
}

/// Runs `action` against `map` and, for mutating actions, saves the result.
///
/// On error nothing is returned for the caller to adopt, so the caller's map
/// stays the last successfully persisted state and no notice is reported.
pub fn process_action(
    map: &CommandMap,
    action: Action,
    ctx: &mut ActionContext<'_>,
) -> CmdRefResult<ActionOutcome> {
    log::debug!("Dispatching action: {}", action);

    let definition = find_action(action)
        .ok_or_else(|| CmdRefError::UnrecognizedAction(action.label().to_string()))?;

    let outcome = (definition.handler)(map, ctx)?;

    if definition.persists {
        collection::persist(&outcome.map, &mut *ctx.store)?;
        log::info!(
            "{} saved {} command(s) to '{}'",
            action,
            outcome.map.len(),
            ctx.store.file_path().display()
        );
    }
    Ok(outcome)
}
