//! Mock reporter for testing.
//!
//! `MockReporter` implements the [`Reporter`] trait and captures every
//! call for later assertion.
//!
//! # Example
//!
//! ```
//! use approved::checklist::{RuleOutcome, Status};
//! use approved::ui::{MockReporter, Reporter};
//!
//! let mut reporter = MockReporter::new();
//! reporter.banner("TESTING").unwrap();
//! reporter.outcome(&RuleOutcome::fail("Acceptance tests")).unwrap();
//!
//! assert_eq!(reporter.banners(), vec!["TESTING"]);
//! assert_eq!(reporter.status_of("Acceptance tests"), Some(Status::Fail));
//! ```

use std::io;

use super::Reporter;
use crate::checklist::{RuleOutcome, Status};
use crate::repository::RepositoryId;

/// A captured reporter call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    /// Run header for a repository.
    Header(RepositoryId),
    /// Section banner.
    Banner(String),
    /// Context diagnostic.
    Diagnostic(String),
    /// Rule outcome.
    Outcome(RuleOutcome),
}

/// Reporter that records calls instead of printing.
#[derive(Debug, Default)]
pub struct MockReporter {
    events: Vec<ReportEvent>,
}

impl MockReporter {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in call order.
    pub fn events(&self) -> &[ReportEvent] {
        &self.events
    }

    /// Banner titles in call order.
    pub fn banners(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ReportEvent::Banner(title) => Some(title.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Diagnostics in call order.
    pub fn diagnostics(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ReportEvent::Diagnostic(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Top-level outcomes in call order.
    pub fn outcomes(&self) -> Vec<&RuleOutcome> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ReportEvent::Outcome(outcome) => Some(outcome),
                _ => None,
            })
            .collect()
    }

    /// Top-level outcomes reported after the banner `title`.
    pub fn outcomes_in(&self, title: &str) -> Vec<&RuleOutcome> {
        let mut in_section = false;
        let mut found = Vec::new();
        for event in &self.events {
            match event {
                ReportEvent::Banner(t) => in_section = t == title,
                ReportEvent::Outcome(outcome) if in_section => found.push(outcome),
                _ => {}
            }
        }
        found
    }

    /// First outcome at any depth whose label equals `label`.
    pub fn find(&self, label: &str) -> Option<&RuleOutcome> {
        self.outcomes()
            .into_iter()
            .flat_map(|o| o.flatten())
            .find(|o| o.label == label)
    }

    /// Status of the first outcome labelled `label`.
    pub fn status_of(&self, label: &str) -> Option<Status> {
        self.find(label).map(|o| o.status)
    }
}

impl Reporter for MockReporter {
    fn header(&mut self, id: &RepositoryId) -> io::Result<()> {
        self.events.push(ReportEvent::Header(id.clone()));
        Ok(())
    }

    fn banner(&mut self, title: &str) -> io::Result<()> {
        self.events.push(ReportEvent::Banner(title.to_string()));
        Ok(())
    }

    fn diagnostic(&mut self, message: &str) -> io::Result<()> {
        self.events.push(ReportEvent::Diagnostic(message.to_string()));
        Ok(())
    }

    fn outcome(&mut self, outcome: &RuleOutcome) -> io::Result<()> {
        self.events.push(ReportEvent::Outcome(outcome.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_events_in_order() {
        let mut reporter = MockReporter::new();
        reporter.banner("STYLE").unwrap();
        reporter.outcome(&RuleOutcome::optional("No manifests")).unwrap();
        reporter.banner("DOCUMENTATION").unwrap();
        reporter.outcome(&RuleOutcome::fail("README exists?")).unwrap();

        assert_eq!(reporter.events().len(), 4);
        assert_eq!(reporter.banners(), vec!["STYLE", "DOCUMENTATION"]);
        assert_eq!(reporter.outcomes_in("STYLE").len(), 1);
        assert_eq!(
            reporter.outcomes_in("DOCUMENTATION")[0].label,
            "README exists?"
        );
    }

    #[test]
    fn find_searches_children() {
        let mut reporter = MockReporter::new();
        reporter
            .outcome(&RuleOutcome::pass("README exists?").with_child(RuleOutcome::fail("Usage")))
            .unwrap();

        assert_eq!(reporter.status_of("Usage"), Some(Status::Fail));
        assert_eq!(reporter.status_of("Setup"), None);
    }

    #[test]
    fn captures_diagnostics() {
        let mut reporter = MockReporter::new();
        reporter.diagnostic("bad metadata").unwrap();
        assert_eq!(reporter.diagnostics(), vec!["bad metadata"]);
    }
}
