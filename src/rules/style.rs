//! Manifest style.
//!
//! Lints every manifest under `manifests/` with the approval
//! suppression profile. A manifest the engine cannot process counts as a
//! violation of that manifest, as does an entry under `manifests/` that
//! could not be read; the remaining manifests are still linted.

use std::fs;

use tracing::{debug, warn};

use crate::checklist::RuleOutcome;
use crate::context::{ManifestFile, RuleContext};
use crate::lint::{LintViolation, ManifestLinter, ManifestSource, SuppressionProfile};
use crate::rules::{ChecklistRule, RuleId};

/// Label when the manifests directory is absent.
pub const NO_MANIFESTS_LABEL: &str = "Manifests directory does not exist (this is optional)";

/// Label of the lint check.
pub const LINT_LABEL: &str = "Manifests directory exists and manifests are puppet-lint error free?";

/// Detail line heading the list of problems.
pub const PROBLEMS_HEADING: &str = "Puppet lint problems found:";

/// Lints manifests for style.
pub struct StyleRule {
    linter: Box<dyn ManifestLinter>,
    profile: SuppressionProfile,
}

impl StyleRule {
    /// Create the rule with the approval profile.
    pub fn new(linter: Box<dyn ManifestLinter>) -> Self {
        Self::with_profile(linter, SuppressionProfile::approval())
    }

    /// Create the rule with a specific profile.
    pub fn with_profile(linter: Box<dyn ManifestLinter>, profile: SuppressionProfile) -> Self {
        Self { linter, profile }
    }

    /// The suppression profile in use.
    pub fn profile(&self) -> &SuppressionProfile {
        &self.profile
    }

    fn lint_manifest(&self, manifest: &ManifestFile) -> Vec<LintViolation> {
        let text = match fs::read(&manifest.path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                warn!(path = %manifest.relative.display(), error = %e, "cannot read manifest");
                return vec![LintViolation::engine_failure(
                    &manifest.relative,
                    format!("cannot read manifest: {e}"),
                )];
            }
        };

        let source = ManifestSource {
            relative: &manifest.relative,
            path: &manifest.path,
            text: &text,
        };

        match self.linter.lint(&source, &self.profile) {
            Ok(violations) => violations
                .into_iter()
                .filter(|v| self.profile.counts(v))
                .collect(),
            Err(e) => {
                warn!(path = %manifest.relative.display(), error = %e, "lint engine failed");
                vec![LintViolation::engine_failure(&manifest.relative, e.to_string())]
            }
        }
    }
}

impl ChecklistRule for StyleRule {
    fn id(&self) -> RuleId {
        RuleId::new("style")
    }

    fn name(&self) -> &str {
        "Style"
    }

    fn description(&self) -> &str {
        "Manifests must be free of puppet-lint warnings"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<RuleOutcome> {
        if !ctx.manifests_dir_exists() {
            return vec![RuleOutcome::optional(NO_MANIFESTS_LABEL)];
        }

        let unreadable = ctx
            .unreadable_manifests()
            .iter()
            .filter(|entry| !self.profile.is_ignored(&entry.relative))
            .map(|entry| {
                LintViolation::engine_failure(
                    &entry.relative,
                    format!("cannot read manifest: {}", entry.message),
                )
            });

        let mut violations: Vec<LintViolation> = ctx
            .manifests()
            .iter()
            .filter(|m| !self.profile.is_ignored(&m.relative))
            .flat_map(|m| self.lint_manifest(m))
            .chain(unreadable)
            .collect();
        violations.sort_by(|a, b| a.path.cmp(&b.path));

        debug!(
            manifests = ctx.manifests().len(),
            violations = violations.len(),
            "style evaluated"
        );

        if violations.is_empty() {
            return vec![RuleOutcome::pass(LINT_LABEL)];
        }

        let outcome = violations.iter().fold(
            RuleOutcome::fail(LINT_LABEL).with_detail(PROBLEMS_HEADING),
            |outcome, violation| outcome.with_detail(violation.to_string()),
        );
        vec![outcome]
    }
}
