// src/error.rs

use thiserror::Error;

use crate::cli::prompter::PromptError;
use crate::core::store::StoreError;

/// Errors surfaced by the action handlers, the dispatcher and the session driver.
#[derive(Error, Debug)]
pub enum CmdRefError {
    /// Reading, parsing or writing a commands file failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The prompt layer failed (closed input, cancelled, bad selection).
    #[error(transparent)]
    Prompt(#[from] PromptError),
    /// An action that the dispatcher does not handle. This is a programming error.
    #[error("Unrecognized action '{0}'.")]
    UnrecognizedAction(String),
}

/// Result alias used throughout the action layer.
pub type CmdRefResult<T> = Result<T, CmdRefError>;
