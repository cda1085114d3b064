//! Checklist execution.

use tracing::{debug, info};

use super::outcome::{RuleOutcome, Status};
use super::registry::Checklist;
use crate::context::RuleContext;
use crate::error::Result;
use crate::ui::Reporter;

/// Counts of outcomes produced by a run, sub-checks included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Passing outcomes.
    pub passed: usize,
    /// Failing outcomes.
    pub failed: usize,
    /// Optional outcomes.
    pub optional: usize,
}

impl RunSummary {
    /// Count an outcome and all of its sub-checks.
    pub fn record(&mut self, outcome: &RuleOutcome) {
        for o in outcome.flatten() {
            match o.status {
                Status::Pass => self.passed += 1,
                Status::Fail => self.failed += 1,
                Status::Optional => self.optional += 1,
            }
        }
    }

    /// Total outcomes counted.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.optional
    }
}

/// Runs every rule of a checklist against one context.
pub struct ChecklistRunner;

impl ChecklistRunner {
    /// Evaluate `checklist`, reporting as each outcome is produced.
    ///
    /// Context diagnostics are reported first. Rules never gate each
    /// other: every section is evaluated regardless of earlier failures.
    pub fn run(
        checklist: &Checklist,
        ctx: &RuleContext,
        reporter: &mut dyn Reporter,
    ) -> Result<RunSummary> {
        for diagnostic in ctx.diagnostics() {
            reporter.diagnostic(&diagnostic.message)?;
        }

        let mut summary = RunSummary::default();
        for section in checklist.sections() {
            reporter.banner(section.title)?;
            for rule in &section.rules {
                let outcomes = rule.evaluate(ctx);
                debug!(rule = %rule.id(), outcomes = outcomes.len(), "rule evaluated");
                for outcome in &outcomes {
                    summary.record(outcome);
                    reporter.outcome(outcome)?;
                }
            }
        }

        info!(
            passed = summary.passed,
            failed = summary.failed,
            optional = summary.optional,
            "checklist complete"
        );
        Ok(summary)
    }
}
