//! Text reporter for terminals and pipes.

use std::io::{self, Write};

use super::icons::SUB_CHECK_MARKER;
use super::theme::ApprovalTheme;
use super::Reporter;
use crate::checklist::RuleOutcome;
use crate::repository::RepositoryId;

/// Width of the header rule before the repository name is added.
const HEADER_RULE_BASE: usize = 27;

/// Writes the report as plain lines, printing as it goes.
pub struct TerminalReporter<W: Write> {
    writer: W,
    theme: ApprovalTheme,
}

impl<W: Write> TerminalReporter<W> {
    /// Reporter writing to `writer`.
    pub fn new(writer: W, theme: ApprovalTheme) -> Self {
        Self { writer, theme }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_outcome(&mut self, outcome: &RuleOutcome, depth: usize) -> io::Result<()> {
        let line = outcome.status.format(&self.theme, &outcome.label);
        if depth == 0 {
            writeln!(self.writer, "{line}")?;
        } else {
            let indent = "   ".repeat(depth - 1);
            writeln!(self.writer, "{indent} {SUB_CHECK_MARKER} {line}")?;
        }

        let detail_indent = "   ".repeat(depth + 1);
        for detail in &outcome.details {
            writeln!(
                self.writer,
                "{detail_indent}{}",
                self.theme.dim.apply_to(detail)
            )?;
        }

        for child in &outcome.children {
            self.write_outcome(child, depth + 1)?;
        }

        Ok(())
    }
}

impl<W: Write> Reporter for TerminalReporter<W> {
    fn header(&mut self, id: &RepositoryId) -> io::Result<()> {
        let rule = "-".repeat(HEADER_RULE_BASE + id.name.chars().count());

        writeln!(self.writer)?;
        writeln!(self.writer, "{rule}")?;
        writeln!(
            self.writer,
            "{}",
            self.theme
                .title
                .apply_to(format!("Starting Approval Eval for {}", id.name))
        )?;
        if let Some(owner) = &id.owner {
            writeln!(self.writer, "{}", self.theme.key.apply_to(format!("by {owner}")))?;
        }
        writeln!(self.writer, "{}{}", self.theme.key.apply_to("uri: "), id.input)?;
        writeln!(self.writer, "{rule}")?;
        writeln!(self.writer)?;
        self.writer.flush()
    }

    fn banner(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", self.theme.format_banner(title))?;
        self.writer.flush()
    }

    fn diagnostic(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", self.theme.format_notice(message))?;
        self.writer.flush()
    }

    fn outcome(&mut self, outcome: &RuleOutcome) -> io::Result<()> {
        self.write_outcome(outcome, 0)?;
        self.writer.flush()
    }
}
