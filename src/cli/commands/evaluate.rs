//! Evaluate command implementation.
//!
//! Resolves the repository, loads the rule context once, prints the run
//! header and runs the checklist. A temporary clone is removed when the
//! command finishes, whatever the outcome.

use std::io::Write;

use anyhow::Context;
use tracing::{debug, warn};

use crate::checklist::{Checklist, ChecklistRunner};
use crate::config::Settings;
use crate::context::RuleContext;
use crate::error::Result;
use crate::lint::PuppetLint;
use crate::repository::{GitCloner, RepositoryCloner, RepositoryResolver};
use crate::ui::{ApprovalTheme, Reporter, TerminalReporter};

use super::dispatcher::{Command, CommandResult};

/// The evaluate command implementation.
pub struct EvaluateCommand<C = GitCloner> {
    repository: String,
    settings: Settings,
    resolver: RepositoryResolver<C>,
    checklist: Checklist,
}

impl EvaluateCommand<GitCloner> {
    /// Create the command with `git` cloning and `puppet-lint`.
    pub fn new(repository: impl Into<String>, settings: Settings) -> Self {
        let resolver = RepositoryResolver::new(GitCloner::new(settings.clone_timeout));
        let checklist = Checklist::standard(Box::new(PuppetLint::new(settings.lint_timeout)));
        Self {
            repository: repository.into(),
            settings,
            resolver,
            checklist,
        }
    }
}

impl<C: RepositoryCloner> EvaluateCommand<C> {
    /// Create the command with a custom resolver and checklist.
    pub fn with_parts(
        repository: impl Into<String>,
        settings: Settings,
        resolver: RepositoryResolver<C>,
        checklist: Checklist,
    ) -> Self {
        Self {
            repository: repository.into(),
            settings,
            resolver,
            checklist,
        }
    }

    /// The repository argument.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Evaluate the repository, sending output to `reporter`.
    pub fn evaluate(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let resolved = self.resolver.resolve(&self.repository)?;
        debug!(
            path = %resolved.working_dir().display(),
            temporary = resolved.is_temporary(),
            "repository resolved"
        );

        let ctx = RuleContext::load(resolved.working_dir());

        reporter
            .header(resolved.id())
            .context("cannot write report header")?;
        ChecklistRunner::run(&self.checklist, &ctx, reporter)?;

        if let Err(e) = resolved.cleanup() {
            warn!(error = %e, "temporary clone left behind");
        }

        Ok(CommandResult::success())
    }
}

impl<C: RepositoryCloner> Command for EvaluateCommand<C> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let theme = ApprovalTheme::for_color(self.settings.use_color);
        let mut reporter = TerminalReporter::new(out, theme);
        self.evaluate(&mut reporter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::Status;
    use crate::error::ApprovalError;
    use crate::lint::{LintViolation, ManifestLinter, ManifestSource, SuppressionProfile};
    use crate::ui::MockReporter;
    use std::path::Path;
    use tempfile::TempDir;

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

    struct RefusingCloner;

    impl RepositoryCloner for RefusingCloner {
        fn fetch_into(&self, url: &str, _target: &Path) -> Result<()> {
            Err(ApprovalError::CloneFailed {
                url: url.to_string(),
                message: "repository not found".to_string(),
            })
        }
    }

    fn command(repository: &str) -> EvaluateCommand<RefusingCloner> {
        EvaluateCommand::with_parts(
            repository,
            Settings::default(),
            RepositoryResolver::with_cloner(RefusingCloner),
            Checklist::standard(Box::new(CleanLinter)),
        )
    }

    #[test]
    fn empty_module_reports_every_section() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp.path().to_string_lossy());
        let mut reporter = MockReporter::new();

        let result = cmd.evaluate(&mut reporter).unwrap();

        assert_eq!(result, CommandResult::success());
        assert_eq!(reporter.banners().len(), 9);
        assert_eq!(
            reporter.status_of("Manifests directory does not exist (this is optional)"),
            Some(Status::Optional)
        );
        assert_eq!(reporter.status_of("README exists?"), Some(Status::Fail));
        assert_eq!(reporter.status_of("LICENSE exists?"), Some(Status::Fail));
        assert_eq!(reporter.status_of("metadata.json exists?"), Some(Status::Fail));
        assert_eq!(reporter.status_of("No version to check"), Some(Status::Fail));
        assert_eq!(reporter.status_of("Acceptance tests"), Some(Status::Fail));
        assert_eq!(reporter.status_of("Unit tests"), Some(Status::Fail));
    }

    #[test]
    fn header_comes_first() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp.path().to_string_lossy());
        let mut reporter = MockReporter::new();

        cmd.evaluate(&mut reporter).unwrap();

        assert!(matches!(
            reporter.events()[0],
            crate::ui::ReportEvent::Header(_)
        ));
    }

    #[test]
    fn clone_failure_is_resolution_error_without_output() {
        let cmd = command("https://example.invalid/org/missing.git");
        let mut reporter = MockReporter::new();

        let err = cmd.evaluate(&mut reporter).unwrap_err();

        assert!(err.is_resolution_error());
        assert!(reporter.events().is_empty());
    }

    #[test]
    fn execute_renders_plain_text() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp.path().to_string_lossy());
        let mut out = Vec::new();

        cmd.execute(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("====STYLE\nManifests directory does not exist (this is optional) ⁕\n"));
        assert!(text.contains("README exists? ✘"));
        assert_eq!(cmd.repository(), temp.path().to_string_lossy());
    }
}
