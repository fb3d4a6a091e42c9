//! CLI argument parsing and command handlers

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, RequestArgs};
