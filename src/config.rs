//! Fixed checklist settings.
//!
//! The checklist has no configuration file. Everything it looks for is
//! declared here as constants, and the few run-time knobs live in
//! [`Settings`].

use std::time::Duration;

/// README file names, in lookup order.
pub const README_FILENAMES: &[&str] = &["README.md", "README.markdown"];

/// Table of contents heading looked for in the README (matched case-insensitively).
pub const TABLE_OF_CONTENTS_MARKER: &str = "#### Table of Contents";

/// Level-2 README sections, in report order.
pub const README_SECTIONS: &[&str] = &[
    "Module Description",
    "Setup",
    "Usage",
    "Reference",
    "Limitations",
    "Development",
];

/// Module metadata file name.
pub const METADATA_FILENAME: &str = "metadata.json";

/// Metadata fields that must be present and non-empty, in report order.
pub const METADATA_FIELDS: &[&str] = &[
    "name",
    "version",
    "author",
    "summary",
    "license",
    "source",
    "project_page",
    "issues_url",
    "operatingsystem_support",
];

/// License file name in the module root.
pub const LICENSE_FILENAME: &str = "LICENSE";

/// Recognised license identifiers and the fragment their LICENSE text must contain.
pub const RECOGNIZED_LICENSES: &[(&str, &str)] =
    &[("Apache-2.0", "Apache"), ("MIT", "MIT"), ("BSD", "BSD")];

/// Directory holding the module's manifests.
pub const MANIFESTS_DIR: &str = "manifests";

/// Manifest file extension.
pub const MANIFEST_EXTENSION: &str = "pp";

/// Tolerant three-part numeric version pattern.
pub const VERSION_PATTERN: &str = r"\d+\.\d{1,2}\.\d+";

/// Default deadline for `git clone`.
pub const DEFAULT_CLONE_TIMEOUT: Duration = Duration::from_secs(300);

/// Default deadline for one `puppet-lint` invocation.
pub const DEFAULT_LINT_TIMEOUT: Duration = Duration::from_secs(60);

/// Run-time settings for a checklist run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Deadline for cloning a remote repository.
    pub clone_timeout: Duration,
    /// Deadline for linting a single manifest.
    pub lint_timeout: Duration,
    /// Whether report output is coloured.
    pub use_color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            clone_timeout: DEFAULT_CLONE_TIMEOUT,
            lint_timeout: DEFAULT_LINT_TIMEOUT,
            use_color: false,
        }
    }
}

impl Settings {
    /// Settings for the current terminal.
    pub fn detect() -> Self {
        Self {
            use_color: crate::ui::should_use_colors(),
            ..Self::default()
        }
    }
}
