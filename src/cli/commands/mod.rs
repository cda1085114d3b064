//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait. [`CommandDispatcher`]
//! picks the command from the parsed arguments:
//! - no repository: [`usage::UsageCommand`] prints the criteria
//! - a repository: [`evaluate::EvaluateCommand`] runs the checklist

pub mod dispatcher;
pub mod evaluate;
pub mod usage;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use evaluate::EvaluateCommand;
pub use usage::UsageCommand;
