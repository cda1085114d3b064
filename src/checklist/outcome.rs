//! Rule outcomes.

use std::fmt;

/// Classification of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The criterion is met.
    Pass,
    /// The criterion is not met.
    Fail,
    /// Advisory or not applicable; never a violation.
    Optional,
}

impl Status {
    /// `Pass` when `condition` holds, else `Fail`.
    pub fn from_bool(condition: bool) -> Self {
        if condition {
            Self::Pass
        } else {
            Self::Fail
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pass => write!(f, "pass"),
            Status::Fail => write!(f, "fail"),
            Status::Optional => write!(f, "optional"),
        }
    }
}

/// One report line, with optional detail lines and sub-checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Classification.
    pub status: Status,
    /// Human-readable label.
    pub label: String,
    /// Lines printed beneath the label without a glyph.
    pub details: Vec<String>,
    /// Sub-checks printed beneath the label.
    pub children: Vec<RuleOutcome>,
}

impl RuleOutcome {
    /// Create an outcome.
    pub fn new(status: Status, label: impl Into<String>) -> Self {
        Self {
            status,
            label: label.into(),
            details: vec![],
            children: vec![],
        }
    }

    /// A passing outcome.
    pub fn pass(label: impl Into<String>) -> Self {
        Self::new(Status::Pass, label)
    }

    /// A failing outcome.
    pub fn fail(label: impl Into<String>) -> Self {
        Self::new(Status::Fail, label)
    }

    /// An advisory outcome.
    pub fn optional(label: impl Into<String>) -> Self {
        Self::new(Status::Optional, label)
    }

    /// Pass or fail depending on `condition`.
    pub fn check(condition: bool, label: impl Into<String>) -> Self {
        Self::new(Status::from_bool(condition), label)
    }

    /// Add a detail line.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    /// Add a sub-check.
    pub fn with_child(mut self, child: RuleOutcome) -> Self {
        self.children.push(child);
        self
    }

    /// Add several sub-checks, keeping their order.
    pub fn with_children(mut self, children: impl IntoIterator<Item = RuleOutcome>) -> Self {
        self.children.extend(children);
        self
    }

    /// This outcome followed by all nested sub-checks, depth first.
    pub fn flatten(&self) -> Vec<&RuleOutcome> {
        let mut all = vec![self];
        for child in &self.children {
            all.extend(child.flatten());
        }
        all
    }
}
