//! Criteria reviewed by humans.

use crate::checklist::RuleOutcome;
use crate::context::RuleContext;
use crate::rules::{ChecklistRule, RuleId};

/// Label reported for sections without automated checks.
pub const MANUAL_REVIEW_LABEL: &str = "Checks not currently implemented (manual review)";

/// Placeholder for a section that is only reviewed manually.
pub struct ManualReviewRule {
    id: &'static str,
    name: &'static str,
}

impl ManualReviewRule {
    /// Create a placeholder for the named section.
    pub fn new(id: &'static str, name: &'static str) -> Self {
        Self { id, name }
    }
}

impl ChecklistRule for ManualReviewRule {
    fn id(&self) -> RuleId {
        RuleId::new(self.id)
    }

    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        "Reviewed manually"
    }

    fn evaluate(&self, _ctx: &RuleContext) -> Vec<RuleOutcome> {
        vec![RuleOutcome::optional(MANUAL_REVIEW_LABEL)]
    }
}
