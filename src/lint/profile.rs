//! Lint suppression profile.

use std::path::Path;

use super::violation::{LintViolation, ViolationKind};

/// Checks disabled for the approval style evaluation.
const APPROVAL_DISABLED_CHECKS: &[&str] = &[
    "80chars",
    "140chars",
    "class_inherits_from_params_class",
    "class_parameter_defaults",
    "documentation",
    "single_quote_string_with_variables",
];

/// Module-relative directories whose manifests are never linted.
const APPROVAL_IGNORED_DIRS: &[&str] = &["spec", "pkg"];

/// Which lint checks are suppressed and which paths are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuppressionProfile {
    /// Check names whose problems are dropped.
    pub disabled_checks: Vec<String>,
    /// Module-relative directories excluded from linting.
    pub ignored_dirs: Vec<String>,
    /// Whether warnings count as failures.
    pub fail_on_warnings: bool,
}

impl SuppressionProfile {
    /// The fixed profile used by the style rule.
    pub fn approval() -> Self {
        Self {
            disabled_checks: APPROVAL_DISABLED_CHECKS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            ignored_dirs: APPROVAL_IGNORED_DIRS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            fail_on_warnings: true,
        }
    }

    /// Whether a check is disabled.
    pub fn is_disabled(&self, check: &str) -> bool {
        self.disabled_checks.iter().any(|c| c == check)
    }

    /// Whether a module-relative path is excluded from linting.
    pub fn is_ignored(&self, relative: &Path) -> bool {
        self.ignored_dirs
            .iter()
            .any(|dir| relative.starts_with(dir))
    }

    /// Whether a violation survives this profile and fails the style check.
    pub fn counts(&self, violation: &LintViolation) -> bool {
        if self.is_disabled(&violation.check) {
            return false;
        }
        self.fail_on_warnings || violation.kind == ViolationKind::Error
    }
}

impl Default for SuppressionProfile {
    fn default() -> Self {
        Self::approval()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(check: &str, kind: ViolationKind) -> LintViolation {
        LintViolation::new("manifests/init.pp", kind, check, "msg")
    }

    #[test]
    fn approval_profile_disables_documented_checks() {
        let profile = SuppressionProfile::approval();
        for check in [
            "80chars",
            "140chars",
            "class_inherits_from_params_class",
            "class_parameter_defaults",
            "documentation",
            "single_quote_string_with_variables",
        ] {
            assert!(profile.is_disabled(check), "{check} should be disabled");
        }
        assert!(!profile.is_disabled("trailing_whitespace"));
        assert!(profile.fail_on_warnings);
    }

    #[test]
    fn spec_and_pkg_paths_are_ignored() {
        let profile = SuppressionProfile::approval();
        assert!(profile.is_ignored(Path::new("spec/fixtures/manifests/site.pp")));
        assert!(profile.is_ignored(Path::new("pkg/mod-1.0.0/manifests/init.pp")));
        assert!(!profile.is_ignored(Path::new("manifests/init.pp")));
        assert!(!profile.is_ignored(Path::new("manifests/spec/init.pp")));
        assert!(!profile.is_ignored(Path::new("specs/init.pp")));
    }

    #[test]
    fn disabled_checks_do_not_count() {
        let profile = SuppressionProfile::approval();
        assert!(!profile.counts(&violation("140chars", ViolationKind::Warning)));
        assert!(profile.counts(&violation("trailing_whitespace", ViolationKind::Warning)));
        assert!(profile.counts(&violation("syntax", ViolationKind::Error)));
    }

    #[test]
    fn warnings_pass_when_not_failing_on_warnings() {
        let profile = SuppressionProfile {
            fail_on_warnings: false,
            ..SuppressionProfile::approval()
        };
        assert!(!profile.counts(&violation("trailing_whitespace", ViolationKind::Warning)));
        assert!(profile.counts(&violation("syntax", ViolationKind::Error)));
    }

    #[test]
    fn default_is_approval_profile() {
        assert_eq!(SuppressionProfile::default(), SuppressionProfile::approval());
    }
}
