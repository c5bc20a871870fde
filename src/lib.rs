//! # cmdref
//!
//! A personal reference manager for shell commands. Snippets are stored as a
//! JSON array in the user's config directory and managed through an
//! interactive prompt menu.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

pub mod bridge;
pub mod cli;
pub mod constants;
pub mod core;
pub mod error;
pub mod models;
