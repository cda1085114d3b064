//! Child process execution.

pub mod command;

pub use command::{display_command, run, CommandOptions, CommandResult};
