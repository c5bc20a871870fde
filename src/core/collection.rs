// src/core/collection.rs

//! The in-memory command collection: a name-keyed map that is rebuilt from the
//! store at session start and replaced wholesale by each action.

use std::collections::BTreeMap;

use crate::core::store::{CommandStore, StoreError};
use crate::models::Command;

/// Commands keyed by name. Names are unique; later inserts win.
pub type CommandMap = BTreeMap<String, Command>;

/// Builds a map from a list. On duplicate names the last occurrence wins.
pub fn from_commands<I>(commands: I) -> CommandMap
where
    I: IntoIterator<Item = Command>,
{
    commands
        .into_iter()
        .map(|cmd| (cmd.name.clone(), cmd))
        .collect()
}

/// Flattens a map back into the list shape that gets persisted.
pub fn to_commands(map: &CommandMap) -> Vec<Command> {
    map.values().cloned().collect()
}

/// Reads the canonical store into a fresh map.
pub fn load_commands(store: &dyn CommandStore) -> Result<CommandMap, StoreError> {
    Ok(from_commands(store.load()?))
}

/// Rewrites the whole store from `map`.
pub fn persist(map: &CommandMap, store: &mut dyn CommandStore) -> Result<(), StoreError> {
    store.save(&to_commands(map))
}

/// Returns a copy of `map` with every command in `incoming` upserted by name.
pub fn merge<I>(map: &CommandMap, incoming: I) -> CommandMap
where
    I: IntoIterator<Item = Command>,
{
    let mut merged = map.clone();
    merged.extend(incoming.into_iter().map(|cmd| (cmd.name.clone(), cmd)));
    merged
}

/// All names, in map order.
pub fn names(map: &CommandMap) -> Vec<String> {
    map.keys().cloned().collect()
}

/// `(label, name)` pairs for the View picker, sorted by label.
pub fn view_entries(map: &CommandMap) -> Vec<(String, String)> {
    let mut entries: Vec<(String, String)> = map
        .values()
        .map(|cmd| (cmd.view_label(), cmd.name.clone()))
        .collect();
    entries.sort();
    entries
}
