//! Approved - Puppet Approved checklist evaluation.
//!
//! Approved inspects a Puppet module repository (a local checkout or a
//! git URL it clones) and reports, criterion by criterion, whether the
//! module meets the Puppet Approved checklist.
//!
//! # Modules
//!
//! - [`checklist`] - Rule outcomes, the ordered checklist and its runner
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Fixed checklist constants and run-time settings
//! - [`context`] - Module artifacts shared by every rule
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Manifest style linting
//! - [`repository`] - Repository resolution and cloning
//! - [`rules`] - The checklist criteria and their evaluators
//! - [`shell`] - Child process execution
//! - [`ui`] - Report rendering
//!
//! # Example
//!
//! ```
//! use approved::checklist::{Checklist, ChecklistRunner, Status};
//! use approved::context::RuleContext;
//! use approved::lint::PuppetLint;
//! use approved::ui::MockReporter;
//!
//! let dir = tempfile::TempDir::new().unwrap();
//! std::fs::create_dir_all(dir.path().join("spec/acceptance")).unwrap();
//!
//! let ctx = RuleContext::load(dir.path());
//! let checklist = Checklist::standard(Box::new(PuppetLint::default()));
//! let mut reporter = MockReporter::new();
//! ChecklistRunner::run(&checklist, &ctx, &mut reporter).unwrap();
//!
//! assert_eq!(reporter.status_of("Acceptance tests"), Some(Status::Pass));
//! assert_eq!(reporter.status_of("README exists?"), Some(Status::Fail));
//! ```

pub mod checklist;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod lint;
pub mod repository;
pub mod rules;
pub mod shell;
pub mod ui;

pub use error::{ApprovalError, Result};
