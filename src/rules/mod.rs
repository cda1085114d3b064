#![doc = include_str!("criteria.md")]
//!
//! # Rules
//!
//! Each criterion with an automated check is a [`ChecklistRule`]. Rules
//! read the shared [`RuleContext`] and return their outcomes in report
//! order; they never see each other's results.

pub mod documentation;
pub mod license;
pub mod manual_review;
pub mod metadata;
pub mod semver;
pub mod style;
pub mod testing;

pub use documentation::DocumentationRule;
pub use license::LicenseRule;
pub use manual_review::ManualReviewRule;
pub use metadata::MetadataRule;
pub use semver::SemverRule;
pub use style::StyleRule;
pub use testing::TestingRule;

use std::fmt;

use crate::checklist::RuleOutcome;
use crate::context::RuleContext;

/// The checklist criteria, printed when no repository is given.
pub const CRITERIA: &str = include_str!("criteria.md");

/// Unique identifier for a checklist rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One evaluator of the checklist.
pub trait ChecklistRule {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Evaluate the module and return outcomes in report order.
    fn evaluate(&self, ctx: &RuleContext) -> Vec<RuleOutcome>;
}
