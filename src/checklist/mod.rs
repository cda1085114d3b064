//! Checklist evaluation.
//!
//! - [`RuleOutcome`] and [`Status`] - what a rule reports
//! - [`Checklist`] - the ordered sections of rules
//! - [`ChecklistRunner`] - evaluates every section and reports as it goes

pub mod outcome;
pub mod registry;
pub mod runner;

pub use outcome::{RuleOutcome, Status};
pub use registry::{Checklist, Section};
pub use runner::{ChecklistRunner, RunSummary};
