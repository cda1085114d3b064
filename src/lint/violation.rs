//! Style violations reported by the lint engine.

use std::fmt;
use std::path::PathBuf;

/// Kind of a lint problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ViolationKind {
    /// Style warning.
    Warning,
    /// Style error, or a manifest the engine could not process.
    Error,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Warning => write!(f, "warning"),
            ViolationKind::Error => write!(f, "error"),
        }
    }
}

/// One problem in one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintViolation {
    /// Manifest path relative to the module root.
    pub path: PathBuf,
    /// 1-based line, when known.
    pub line: Option<u32>,
    /// 1-based column, when known.
    pub column: Option<u32>,
    /// Warning or error.
    pub kind: ViolationKind,
    /// Name of the check that fired.
    pub check: String,
    /// Human-readable message.
    pub message: String,
}

/// Check name used when the engine itself failed on a manifest.
pub const ENGINE_FAILURE_CHECK: &str = "lint_engine";

impl LintViolation {
    /// Create a violation without a location.
    pub fn new(
        path: impl Into<PathBuf>,
        kind: ViolationKind,
        check: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            line: None,
            column: None,
            kind,
            check: check.into(),
            message: message.into(),
        }
    }

    /// Add a line/column location.
    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// A violation standing in for a manifest the engine could not process.
    pub fn engine_failure(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(path, ViolationKind::Error, ENGINE_FAILURE_CHECK, message)
    }
}

impl fmt::Display for LintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
            if let Some(column) = self.column {
                write!(f, ":{column}")?;
            }
        }
        write!(f, ": {}[{}]: {}", self.kind, self.check, self.message)
    }
}
