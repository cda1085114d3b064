//! Manifest style linting.
//!
//! The style rule talks to the lint engine only through the narrow
//! [`ManifestLinter`] trait:
//!
//! - **Source** - the manifest text and where it lives ([`ManifestSource`])
//! - **Profile** - which checks are suppressed ([`SuppressionProfile`])
//! - **Violations** - what the engine found ([`LintViolation`])
//!
//! [`PuppetLint`] is the production engine.
//!
//! # Example
//!
//! ```
//! use approved::lint::{LintViolation, SuppressionProfile, ViolationKind};
//!
//! let profile = SuppressionProfile::approval();
//! let long_line = LintViolation::new(
//!     "manifests/init.pp",
//!     ViolationKind::Warning,
//!     "140chars",
//!     "line has more than 140 characters",
//! );
//!
//! // Line length is suppressed for approval
//! assert!(!profile.counts(&long_line));
//! ```

pub mod profile;
pub mod puppet_lint;
pub mod violation;

use std::path::Path;

pub use profile::SuppressionProfile;
pub use puppet_lint::PuppetLint;
pub use violation::{LintViolation, ViolationKind};

use crate::error::Result;

/// A manifest handed to the lint engine.
#[derive(Debug, Clone, Copy)]
pub struct ManifestSource<'a> {
    /// Path relative to the module root, used when reporting.
    pub relative: &'a Path,
    /// Absolute path on disk.
    pub path: &'a Path,
    /// Manifest text, for in-process linters. Engines that run an
    /// external program lint the file at `path` instead.
    pub text: &'a str,
}

/// A style checker for manifests.
pub trait ManifestLinter {
    /// Lint one manifest under `profile`.
    ///
    /// Returns only violations that count under the profile. An `Err`
    /// means the engine could not process this manifest at all.
    fn lint(
        &self,
        source: &ManifestSource<'_>,
        profile: &SuppressionProfile,
    ) -> Result<Vec<LintViolation>>;
}
