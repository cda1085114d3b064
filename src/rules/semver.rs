//! Semantic versioning.

use std::sync::LazyLock;

use regex::Regex;

use crate::checklist::RuleOutcome;
use crate::config::VERSION_PATTERN;
use crate::context::RuleContext;
use crate::rules::{ChecklistRule, RuleId};

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VERSION_PATTERN).expect("VERSION_PATTERN must compile"));

/// Checks that the module version is a three-part numeric version.
#[derive(Debug, Default, Clone, Copy)]
pub struct SemverRule;

impl SemverRule {
    /// Whether `version` contains a three-part numeric version.
    pub fn is_valid(version: &str) -> bool {
        VERSION_REGEX.is_match(version)
    }
}

impl ChecklistRule for SemverRule {
    fn id(&self) -> RuleId {
        RuleId::new("semver")
    }

    fn name(&self) -> &str {
        "SemVer"
    }

    fn description(&self) -> &str {
        "Modules must be versioned according to SemVer"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<RuleOutcome> {
        let Some(metadata) = ctx.metadata() else {
            return vec![RuleOutcome::fail("No version to check")];
        };

        let outcome = match metadata.version() {
            Some(version) if Self::is_valid(version) => RuleOutcome::pass(version),
            Some(version) => RuleOutcome::fail(format!(
                "Version '{version}' is not a three-part numeric version"
            )),
            None => RuleOutcome::fail("No version to check"),
        };
        vec![outcome]
    }
}
