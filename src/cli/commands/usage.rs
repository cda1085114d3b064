//! Usage command: print the checklist criteria.

use std::io::Write;

use crate::error::Result;
use crate::rules::CRITERIA;

use super::dispatcher::{Command, CommandResult};

/// Prints the criteria text.
pub struct UsageCommand;

impl Command for UsageCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        out.write_all(CRITERIA.as_bytes())?;
        out.flush()?;
        Ok(CommandResult::success())
    }
}
