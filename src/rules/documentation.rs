//! README documentation.

use crate::checklist::RuleOutcome;
use crate::config::{README_SECTIONS, TABLE_OF_CONTENTS_MARKER};
use crate::context::RuleContext;
use crate::rules::{ChecklistRule, RuleId};

/// Checks the README and its standard sections.
pub struct DocumentationRule;

impl ChecklistRule for DocumentationRule {
    fn id(&self) -> RuleId {
        RuleId::new("documentation")
    }

    fn name(&self) -> &str {
        "Documentation"
    }

    fn description(&self) -> &str {
        "Modules must have a README following the standard template"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<RuleOutcome> {
        let Some(readme) = ctx.readme() else {
            return vec![RuleOutcome::fail("README exists?")];
        };

        let toc = RuleOutcome::check(
            readme.contains_ignore_case(TABLE_OF_CONTENTS_MARKER),
            "Table of contents?",
        )
        .with_children(
            README_SECTIONS
                .iter()
                .map(|section| RuleOutcome::check(readme.has_section(section), *section)),
        );

        vec![RuleOutcome::pass("README exists?"), toc]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::Status;
    use tempfile::TempDir;

    fn evaluate_readme(text: Option<&str>) -> Vec<RuleOutcome> {
        let temp = TempDir::new().unwrap();
        if let Some(text) = text {
            std::fs::write(temp.path().join("README.md"), text).unwrap();
        }
        DocumentationRule.evaluate(&RuleContext::load(temp.path()))
    }

    fn section_status(outcomes: &[RuleOutcome], section: &str) -> Status {
        outcomes[1]
            .children
            .iter()
            .find(|c| c.label == section)
            .map(|c| c.status)
            .unwrap()
    }

    #[test]
    fn missing_readme_fails_without_sub_checks() {
        let outcomes = evaluate_readme(None);

        assert_eq!(outcomes, vec![RuleOutcome::fail("README exists?")]);
    }

    #[test]
    fn setup_section_only() {
        let outcomes = evaluate_readme(Some("# mod\n\n## Setup\n"));

        assert_eq!(outcomes[0].status, Status::Pass);
        assert_eq!(outcomes[1].status, Status::Fail);
        assert_eq!(section_status(&outcomes, "Setup"), Status::Pass);
        for section in ["Module Description", "Usage", "Reference", "Limitations", "Development"] {
            assert_eq!(section_status(&outcomes, section), Status::Fail, "{section}");
        }
    }

    #[test]
    fn sections_match_case_insensitively() {
        let readme = "#### TABLE OF CONTENTS\n\
                      ## module description\n## SETUP\n## Usage\n\
                      ## Reference\n## Limitations\n## Development\n";

        let outcomes = evaluate_readme(Some(readme));

        assert_eq!(outcomes[1].status, Status::Pass);
        assert!(outcomes[1].children.iter().all(|c| c.status == Status::Pass));
    }

    #[test]
    fn sections_reported_in_template_order() {
        let outcomes = evaluate_readme(Some(""));

        let labels: Vec<_> = outcomes[1].children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, README_SECTIONS);
    }

    #[test]
    fn deeper_heading_contains_section_marker() {
        // `### Usage` contains `## usage`, which counts
        let outcomes = evaluate_readme(Some("### Usage\n"));

        assert_eq!(section_status(&outcomes, "Usage"), Status::Pass);
    }
}
