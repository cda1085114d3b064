//! Module metadata completeness.

use crate::checklist::RuleOutcome;
use crate::config::{METADATA_FIELDS, METADATA_FILENAME};
use crate::context::RuleContext;
use crate::rules::{ChecklistRule, RuleId};

/// Checks that `metadata.json` exists and fills every required field.
pub struct MetadataRule;

impl ChecklistRule for MetadataRule {
    fn id(&self) -> RuleId {
        RuleId::new("metadata")
    }

    fn name(&self) -> &str {
        "Metadata"
    }

    fn description(&self) -> &str {
        "Modules must express every required metadata field"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<RuleOutcome> {
        let exists = RuleOutcome::check(
            ctx.metadata_file_exists(),
            format!("{METADATA_FILENAME} exists?"),
        );

        let Some(metadata) = ctx.metadata() else {
            return vec![exists];
        };

        let mut outcome = exists.with_children(
            METADATA_FIELDS
                .iter()
                .map(|field| RuleOutcome::check(metadata.has_value(field), *field)),
        );

        let puppet_first = metadata
            .requirements()
            .first()
            .and_then(|r| r.name.as_deref())
            == Some("puppet");
        if puppet_first {
            outcome = outcome.with_child(RuleOutcome::pass("puppet requirement"));
        }

        vec![outcome]
    }
}
