//! Report output.
//!
//! This module provides:
//! - [`Reporter`] trait for report output abstraction
//! - [`TerminalReporter`] for stdout (or any writer)
//! - [`MockReporter`] for tests
//! - Theme and status glyphs
//!
//! # Example
//!
//! ```
//! use approved::checklist::RuleOutcome;
//! use approved::ui::{ApprovalTheme, Reporter, TerminalReporter};
//!
//! let mut reporter = TerminalReporter::new(Vec::new(), ApprovalTheme::plain());
//! reporter.banner("TESTING").unwrap();
//! reporter.outcome(&RuleOutcome::pass("Unit tests")).unwrap();
//!
//! let output = String::from_utf8(reporter.into_inner()).unwrap();
//! assert_eq!(output, "====TESTING\nUnit tests ✔\n");
//! ```

pub mod icons;
pub mod mock;
pub mod terminal;
pub mod theme;

use std::io;

pub use icons::SUB_CHECK_MARKER;
pub use mock::{MockReporter, ReportEvent};
pub use terminal::TerminalReporter;
pub use theme::{should_use_colors, ApprovalTheme};

use crate::checklist::RuleOutcome;
use crate::repository::RepositoryId;

/// Sink for checklist output.
///
/// Every call is rendered immediately; nothing is buffered until the end
/// of the run.
pub trait Reporter {
    /// Show the run header.
    fn header(&mut self, id: &RepositoryId) -> io::Result<()>;

    /// Show a section banner.
    fn banner(&mut self, title: &str) -> io::Result<()>;

    /// Show a problem found while loading the module.
    fn diagnostic(&mut self, message: &str) -> io::Result<()>;

    /// Show one rule outcome with its details and sub-checks.
    fn outcome(&mut self, outcome: &RuleOutcome) -> io::Result<()>;
}
