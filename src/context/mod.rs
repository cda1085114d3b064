//! Shared artifacts read by every checklist rule.
//!
//! [`RuleContext::load`] reads the README, metadata, manifests and
//! LICENSE of a working directory once. Rules only ever see the context
//! by shared reference.
//!
//! Nothing here fails the run: a missing or unreadable artifact is
//! simply absent, an unreadable entry under `manifests/` is recorded
//! for the style rule to report, and a malformed `metadata.json` is recorded as a
//! [`ContextDiagnostic`] and treated as absent.

pub mod documents;
pub mod manifests;
pub mod metadata;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

pub use documents::{LicenseFile, ReadmeDocument};
pub use manifests::{ManifestFile, ManifestListing, UnreadableEntry};
pub use metadata::{ModuleMetadata, Requirement};

use crate::config::{LICENSE_FILENAME, MANIFESTS_DIR, METADATA_FILENAME, README_FILENAMES};

/// A problem found while loading the context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextDiagnostic {
    /// Human-readable message.
    pub message: String,
}

/// Artifacts of the module under evaluation.
#[derive(Debug, Clone)]
pub struct RuleContext {
    working_dir: PathBuf,
    readme: Option<ReadmeDocument>,
    metadata_file_exists: bool,
    metadata: Option<ModuleMetadata>,
    manifests_dir_exists: bool,
    manifests: Vec<ManifestFile>,
    unreadable_manifests: Vec<UnreadableEntry>,
    license: Option<LicenseFile>,
    diagnostics: Vec<ContextDiagnostic>,
}

impl RuleContext {
    /// Load every artifact from `working_dir`.
    pub fn load(working_dir: &Path) -> Self {
        let mut diagnostics = Vec::new();

        let readme = load_readme(working_dir);

        let metadata_path = working_dir.join(METADATA_FILENAME);
        let metadata_file_exists = metadata_path.is_file();
        let metadata = if metadata_file_exists {
            load_metadata(&metadata_path, &mut diagnostics)
        } else {
            None
        };

        let manifests_dir = working_dir.join(MANIFESTS_DIR);
        let manifests_dir_exists = manifests_dir.is_dir();
        let ManifestListing {
            manifests,
            unreadable: unreadable_manifests,
        } = if manifests_dir_exists {
            manifests::discover(working_dir, &manifests_dir)
        } else {
            ManifestListing::default()
        };

        let license_path = working_dir.join(LICENSE_FILENAME);
        let license = license_path
            .is_file()
            .then(|| LicenseFile { path: license_path });

        debug!(
            readme = readme.is_some(),
            metadata = metadata.is_some(),
            manifests = manifests.len(),
            unreadable_manifests = unreadable_manifests.len(),
            license = license.is_some(),
            "loaded rule context"
        );

        Self {
            working_dir: working_dir.to_path_buf(),
            readme,
            metadata_file_exists,
            metadata,
            manifests_dir_exists,
            manifests,
            unreadable_manifests,
            license,
            diagnostics,
        }
    }

    /// Root of the module under evaluation.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// The README, if one was found.
    pub fn readme(&self) -> Option<&ReadmeDocument> {
        self.readme.as_ref()
    }

    /// Whether `metadata.json` exists, parseable or not.
    pub fn metadata_file_exists(&self) -> bool {
        self.metadata_file_exists
    }

    /// Parsed metadata; `None` when the file is absent or malformed.
    pub fn metadata(&self) -> Option<&ModuleMetadata> {
        self.metadata.as_ref()
    }

    /// Whether the `manifests/` directory exists.
    pub fn manifests_dir_exists(&self) -> bool {
        self.manifests_dir_exists
    }

    /// Manifests found under `manifests/`, sorted by path.
    pub fn manifests(&self) -> &[ManifestFile] {
        &self.manifests
    }

    /// Entries under `manifests/` that could not be read.
    pub fn unreadable_manifests(&self) -> &[UnreadableEntry] {
        &self.unreadable_manifests
    }

    /// The LICENSE file, if present.
    pub fn license(&self) -> Option<&LicenseFile> {
        self.license.as_ref()
    }

    /// Problems found while loading.
    pub fn diagnostics(&self) -> &[ContextDiagnostic] {
        &self.diagnostics
    }
}

fn load_readme(working_dir: &Path) -> Option<ReadmeDocument> {
    let path = README_FILENAMES
        .iter()
        .map(|name| working_dir.join(name))
        .find(|path| path.is_file())?;

    ReadmeDocument::read(&path)
        .inspect_err(|e| warn!(path = %path.display(), error = %e, "cannot read README"))
        .ok()
}

fn load_metadata(
    path: &Path,
    diagnostics: &mut Vec<ContextDiagnostic>,
) -> Option<ModuleMetadata> {
    let parsed = std::fs::read_to_string(path)
        .map_err(crate::error::ApprovalError::from)
        .and_then(|text| ModuleMetadata::parse(&text, path));

    match parsed {
        Ok(metadata) => Some(metadata),
        Err(e) => {
            warn!(error = %e, "metadata treated as absent");
            diagnostics.push(ContextDiagnostic {
                message: format!("{METADATA_FILENAME} could not be parsed: {e}"),
            });
            None
        }
    }
}
