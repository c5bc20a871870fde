// src/cli/handlers/mod.rs

// One module per menu action. Every handler borrows the current map and
// returns a new one; none of them writes to the store.

use std::fmt;

use crate::{
    cli::prompter::Prompter,
    core::{collection::CommandMap, config::Settings, store::CommandStore},
};

pub mod commons;
pub mod create;
pub mod delete;
pub mod import;
pub mod update;
pub mod view;

/// The collaborators a handler may use during one action.
pub struct ActionContext<'a> {
    pub prompter: &'a mut dyn Prompter,
    pub store: &'a mut dyn CommandStore,
    pub settings: &'a Settings,
}

impl<'a> ActionContext<'a> {
    pub fn new(
        prompter: &'a mut dyn Prompter,
        store: &'a mut dyn CommandStore,
        settings: &'a Settings,
    ) -> Self {
        Self {
            prompter,
            store,
            settings,
        }
    }
}

/// What a handler produced: the new map plus an optional notice to show
/// once the map has been saved.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub map: CommandMap,
    pub notice: Option<String>,
}

impl ActionOutcome {
    pub fn new(map: CommandMap) -> Self {
        Self { map, notice: None }
    }

    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}

impl fmt::Debug for ActionContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionContext")
            .field("store", &self.store.file_path())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
