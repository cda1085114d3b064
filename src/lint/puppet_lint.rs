//! `puppet-lint` adapter.
//!
//! Runs the `puppet-lint` executable on one manifest with `--json` and
//! converts its problem list into [`LintViolation`]s. The suppression
//! profile is applied to the parsed problems, so the adapter does not
//! depend on which `--no-<check>-check` flags a given puppet-lint
//! release understands.
//!
//! `puppet-lint` reads the manifest from disk, so [`ManifestSource::text`]
//! is not used here.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::profile::SuppressionProfile;
use super::violation::{LintViolation, ViolationKind};
use super::{ManifestLinter, ManifestSource};
use crate::error::{ApprovalError, Result};
use crate::shell::{self, CommandOptions};

/// Default executable name.
pub const PUPPET_LINT_PROGRAM: &str = "puppet-lint";

/// Lints manifests with the `puppet-lint` executable.
#[derive(Debug, Clone)]
pub struct PuppetLint {
    program: String,
    timeout: Duration,
}

/// A problem as printed by `puppet-lint --json`.
#[derive(Debug, Deserialize)]
struct Problem {
    message: String,
    #[serde(default)]
    line: Option<u32>,
    #[serde(default)]
    column: Option<u32>,
    kind: String,
    check: String,
}

impl PuppetLint {
    /// Create an adapter for the `puppet-lint` on PATH.
    pub fn new(timeout: Duration) -> Self {
        Self::with_program(PUPPET_LINT_PROGRAM, timeout)
    }

    /// Create an adapter for a specific executable.
    pub fn with_program(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    /// The executable this adapter runs.
    pub fn program(&self) -> &str {
        &self.program
    }

    fn args(source: &ManifestSource<'_>) -> Vec<String> {
        vec![
            "--json".to_string(),
            "--relative".to_string(),
            source.path.to_string_lossy().into_owned(),
        ]
    }
}

impl Default for PuppetLint {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_LINT_TIMEOUT)
    }
}

impl ManifestLinter for PuppetLint {
    fn lint(
        &self,
        source: &ManifestSource<'_>,
        profile: &SuppressionProfile,
    ) -> Result<Vec<LintViolation>> {
        let engine_error = |message: String| ApprovalError::LintEngine {
            path: source.relative.to_path_buf(),
            message,
        };

        let options = CommandOptions {
            timeout: Some(self.timeout),
            ..Default::default()
        };

        let result = shell::run(&self.program, &Self::args(source), &options)
            .map_err(|e| engine_error(e.to_string()))?;

        if result.timed_out {
            return Err(engine_error(format!(
                "{} timed out after {}s",
                self.program,
                self.timeout.as_secs()
            )));
        }

        let stdout = result.stdout.trim();
        if stdout.is_empty() {
            if result.success {
                return Ok(Vec::new());
            }
            return Err(engine_error(format!(
                "{} exited with {:?}: {}",
                self.program,
                result.exit_code,
                result.stderr.trim()
            )));
        }

        let problems = parse_problems(stdout).map_err(engine_error)?;
        debug!(path = %source.relative.display(), problems = problems.len(), "puppet-lint finished");

        Ok(violations(problems, source, profile))
    }
}

fn violations(
    problems: Vec<Problem>,
    source: &ManifestSource<'_>,
    profile: &SuppressionProfile,
) -> Vec<LintViolation> {
    problems
        .into_iter()
        .filter_map(|problem| to_violation(problem, source))
        .filter(|violation| profile.counts(violation))
        .collect()
}

/// Parse `--json` output: a list of problems, possibly nested per file.
fn parse_problems(stdout: &str) -> std::result::Result<Vec<Problem>, String> {
    let value: Value = serde_json::from_str(stdout)
        .map_err(|e| format!("unreadable puppet-lint output: {e}"))?;

    let mut objects = Vec::new();
    flatten(&value, &mut objects);

    objects
        .into_iter()
        .map(|object| {
            Problem::deserialize(object).map_err(|e| format!("unexpected puppet-lint problem: {e}"))
        })
        .collect()
}

fn flatten<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
    match value {
        Value::Array(items) => items.iter().for_each(|item| flatten(item, out)),
        Value::Object(_) => out.push(value),
        _ => {}
    }
}

fn to_violation(problem: Problem, source: &ManifestSource<'_>) -> Option<LintViolation> {
    let kind = match problem.kind.as_str() {
        "warning" => ViolationKind::Warning,
        "error" => ViolationKind::Error,
        // "fixed" and "ignored" entries are not problems.
        _ => return None,
    };

    let mut violation = LintViolation::new(source.relative, kind, problem.check, problem.message);
    violation.line = problem.line;
    violation.column = problem.column;
    Some(violation)
}
