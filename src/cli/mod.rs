// src/cli/mod.rs

//! The interactive front end: argument parsing, prompts, the per-action
//! handlers, the dispatcher that ties them to the store, and the session loop.

pub mod args;
pub mod dispatcher;
pub mod handlers;
pub mod prompter;
pub mod session;

pub use args::{Cli, CliCommand};
