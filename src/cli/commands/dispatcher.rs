//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing parsed arguments

use std::io::Write;

use crate::cli::args::Cli;
use crate::config::Settings;
use crate::error::Result;

use super::evaluate::EvaluateCommand;
use super::usage::UsageCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing its report to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches parsed arguments to their command.
pub struct CommandDispatcher {
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a dispatcher with run-time settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Settings passed to commands.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.repository {
            None => UsageCommand.execute(out),
            Some(repository) => {
                EvaluateCommand::new(repository, self.settings.clone()).execute(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::CRITERIA;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn no_repository_prints_criteria() {
        let dispatcher = CommandDispatcher::new(Settings::default());
        let cli = Cli { repository: None };
        let mut out = Vec::new();

        let result = dispatcher.dispatch(&cli, &mut out).unwrap();

        assert_eq!(result, CommandResult::success());
        assert_eq!(String::from_utf8(out).unwrap(), CRITERIA);
    }

    #[test]
    fn repository_runs_checklist() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(Settings::default());
        let cli = Cli {
            repository: Some(temp.path().to_string_lossy().into_owned()),
        };
        let mut out = Vec::new();

        let result = dispatcher.dispatch(&cli, &mut out).unwrap();

        assert!(result.success);
        assert!(String::from_utf8(out).unwrap().contains("====TESTING"));
    }
}
