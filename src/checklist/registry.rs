//! The ordered checklist.
//!
//! A [`Checklist`] is a list of titled [`Section`]s, each holding the
//! rules whose outcomes are reported under its banner.

use crate::lint::ManifestLinter;
use crate::rules::{
    ChecklistRule, DocumentationRule, LicenseRule, ManualReviewRule, MetadataRule, RuleId,
    SemverRule, StyleRule, TestingRule,
};

/// A titled group of rules.
pub struct Section {
    /// Banner title.
    pub title: &'static str,
    /// Rules in report order.
    pub rules: Vec<Box<dyn ChecklistRule>>,
}

impl Section {
    /// Create a section with a single rule.
    pub fn new(title: &'static str, rule: Box<dyn ChecklistRule>) -> Self {
        Self {
            title,
            rules: vec![rule],
        }
    }
}

/// Sections evaluated in declared order.
#[derive(Default)]
pub struct Checklist {
    sections: Vec<Section>,
}

impl Checklist {
    /// Create an empty checklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// The Puppet Approved checklist, linting manifests with `linter`.
    pub fn standard(linter: Box<dyn ManifestLinter>) -> Self {
        let mut checklist = Self::new();
        checklist.push(Section::new("STYLE", Box::new(StyleRule::new(linter))));
        checklist.push(Section::new("DOCUMENTATION", Box::new(DocumentationRule)));
        checklist.push(Section::new(
            "MAINTENANCE & LIFECYCLE",
            Box::new(ManualReviewRule::new("maintenance", "Maintenance & Lifecycle")),
        ));
        checklist.push(Section::new("LICENSE", Box::new(LicenseRule)));
        checklist.push(Section::new(
            "ORIGINALITY",
            Box::new(ManualReviewRule::new("originality", "Originality")),
        ));
        checklist.push(Section::new("METADATA", Box::new(MetadataRule)));
        checklist.push(Section::new("SEMVER", Box::new(SemverRule)));
        checklist.push(Section::new("TESTING", Box::new(TestingRule)));
        checklist.push(Section::new(
            "PUPPET VERSIONS & FEATURES",
            Box::new(ManualReviewRule::new("puppet-versions", "Puppet Versions & Features")),
        ));
        checklist
    }

    /// Append a section.
    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Sections in order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a rule by ID.
    pub fn rule(&self, id: &RuleId) -> Option<&dyn ChecklistRule> {
        self.sections
            .iter()
            .flat_map(|s| s.rules.iter())
            .find(|r| &r.id() == id)
            .map(|r| r.as_ref())
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the checklist has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::lint::{LintViolation, ManifestSource, SuppressionProfile};

    struct CleanLinter;

    impl ManifestLinter for CleanLinter {
        fn lint(
            &self,
            _source: &ManifestSource<'_>,
            _profile: &SuppressionProfile,
        ) -> Result<Vec<LintViolation>> {
            Ok(vec![])
        }
    }

    #[test]
    fn standard_sections_in_order() {
        let checklist = Checklist::standard(Box::new(CleanLinter));

        let titles: Vec<_> = checklist.sections().iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "STYLE",
                "DOCUMENTATION",
                "MAINTENANCE & LIFECYCLE",
                "LICENSE",
                "ORIGINALITY",
                "METADATA",
                "SEMVER",
                "TESTING",
                "PUPPET VERSIONS & FEATURES",
            ]
        );
    }

    #[test]
    fn rules_are_found_by_id() {
        let checklist = Checklist::standard(Box::new(CleanLinter));

        assert_eq!(checklist.rule(&RuleId::new("semver")).unwrap().name(), "SemVer");
        assert!(checklist.rule(&RuleId::new("missing")).is_none());
    }

    #[test]
    fn empty_checklist() {
        let checklist = Checklist::new();
        assert!(checklist.is_empty());
        assert_eq!(checklist.len(), 0);
    }
}
