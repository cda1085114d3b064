//! Test suite presence.

use crate::checklist::RuleOutcome;
use crate::context::RuleContext;
use crate::rules::{ChecklistRule, RuleId};

/// Checks for acceptance and unit test directories.
pub struct TestingRule;

impl ChecklistRule for TestingRule {
    fn id(&self) -> RuleId {
        RuleId::new("testing")
    }

    fn name(&self) -> &str {
        "Testing"
    }

    fn description(&self) -> &str {
        "Modules should have acceptance and unit tests"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<RuleOutcome> {
        let spec = ctx.working_dir().join("spec");

        vec![
            RuleOutcome::check(spec.join("acceptance").is_dir(), "Acceptance tests"),
            RuleOutcome::check(
                spec.join("unit").exists() || spec.join("classes").exists(),
                "Unit tests",
            ),
        ]
    }
}
