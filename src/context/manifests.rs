//! Manifest discovery under `manifests/`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::MANIFEST_EXTENSION;

/// A manifest found under the manifests directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ManifestFile {
    /// Path relative to the module root, e.g. `manifests/init.pp`.
    pub relative: PathBuf,
    /// Absolute path.
    pub path: PathBuf,
}

/// An entry under `manifests/` that could not be examined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableEntry {
    /// Path relative to the module root.
    pub relative: PathBuf,
    /// Why the entry could not be read.
    pub message: String,
}

/// Result of walking the manifests directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestListing {
    /// Manifests found, sorted by path.
    pub manifests: Vec<ManifestFile>,
    /// Entries skipped because they could not be read, sorted by path.
    pub unreadable: Vec<UnreadableEntry>,
}

/// Collect every manifest below `dir`, at any depth.
///
/// `root` is the module root that relative paths are computed against.
/// An entry that cannot be read is recorded in
/// [`ManifestListing::unreadable`] and the walk carries on. Symlinked
/// directories are not descended into.
pub fn discover(root: &Path, dir: &Path) -> ManifestListing {
    let mut listing = ManifestListing::default();
    collect(root, dir, &mut listing);
    listing.manifests.sort();
    listing.unreadable.sort_by(|a, b| a.relative.cmp(&b.relative));
    listing
}

fn collect(root: &Path, dir: &Path, listing: &mut ManifestListing) {
    let relative_to_root = |path: &Path| path.strip_prefix(root).unwrap_or(path).to_path_buf();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "cannot list manifests");
            listing.unreadable.push(unreadable(relative_to_root(dir), &e));
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "cannot read directory entry");
                listing.unreadable.push(unreadable(relative_to_root(dir), &e));
                continue;
            }
        };
        let path = entry.path();

        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                listing.unreadable.push(unreadable(relative_to_root(&path), &e));
                continue;
            }
        };

        if file_type.is_dir() {
            collect(root, &path, listing);
            continue;
        }

        if !is_manifest(&path) {
            continue;
        }

        if file_type.is_symlink() {
            match fs::metadata(&path) {
                Ok(meta) if meta.is_file() => {}
                Ok(_) => {
                    debug!(path = %path.display(), "skipping symlink to non-file");
                    continue;
                }
                Err(e) => {
                    listing.unreadable.push(unreadable(relative_to_root(&path), &e));
                    continue;
                }
            }
        } else if !file_type.is_file() {
            continue;
        }

        listing.manifests.push(ManifestFile {
            relative: relative_to_root(&path),
            path,
        });
    }
}

fn is_manifest(path: &Path) -> bool {
    path.extension()
        .map(|e| e == MANIFEST_EXTENSION)
        .unwrap_or(false)
}

fn unreadable(relative: PathBuf, error: &io::Error) -> UnreadableEntry {
    UnreadableEntry {
        relative,
        message: error.to_string(),
    }
}
