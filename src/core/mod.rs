// src/core/mod.rs

pub mod collection;
pub mod color;
pub mod config;
pub mod paths;
pub mod store;
