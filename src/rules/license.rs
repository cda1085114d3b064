//! Licensing.
//!
//! Checks that a LICENSE file exists and, when `metadata.json` declares a
//! recognised license, that the LICENSE text matches the declaration.

use tracing::warn;

use crate::checklist::RuleOutcome;
use crate::config::RECOGNIZED_LICENSES;
use crate::context::RuleContext;
use crate::rules::{ChecklistRule, RuleId};

/// Checks the LICENSE file against the declared license.
pub struct LicenseRule;

impl LicenseRule {
    fn cross_check(ctx: &RuleContext, declared: Option<&str>) -> RuleOutcome {
        let label = format!("License type {} verified?", declared.unwrap_or("(none)"));

        let Some(fragment) = declared.and_then(recognized_fragment) else {
            return not_verified(label);
        };
        let Some(license) = ctx.license() else {
            return not_verified(label);
        };

        match license.read_text() {
            Ok(text) => RuleOutcome::check(text.contains(fragment), label),
            Err(e) => {
                warn!(path = %license.path.display(), error = %e, "cannot read LICENSE");
                not_verified(label)
            }
        }
    }
}

fn not_verified(label: String) -> RuleOutcome {
    RuleOutcome::optional(label).with_detail("not verified")
}

/// Text fragment the LICENSE of a recognised license must contain.
pub fn recognized_fragment(declared: &str) -> Option<&'static str> {
    RECOGNIZED_LICENSES
        .iter()
        .find(|(id, _)| *id == declared)
        .map(|(_, fragment)| *fragment)
}

impl ChecklistRule for LicenseRule {
    fn id(&self) -> RuleId {
        RuleId::new("license")
    }

    fn name(&self) -> &str {
        "License"
    }

    fn description(&self) -> &str {
        "Modules must be licensed, preferably under Apache, MIT or BSD"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<RuleOutcome> {
        let mut outcomes = vec![RuleOutcome::check(
            ctx.license().is_some(),
            "LICENSE exists?",
        )];

        if let Some(metadata) = ctx.metadata() {
            outcomes.push(Self::cross_check(ctx, metadata.license()));
        }

        outcomes
    }
}
