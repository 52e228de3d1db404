//! Command implementations
//!
//! Thin runners around the installation engine: each resolves the
//! Minecraft root, builds the registry client and the engine, runs one
//! operation and renders the result.

pub mod completions;
pub mod install;
pub mod list;
pub mod search;
pub mod uninstall;
pub mod update;
