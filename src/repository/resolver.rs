//! Repository resolution.
//!
//! Turns the command-line repository argument into a working directory,
//! cloning into a temporary directory when the argument is not a local
//! directory. The temporary directory lives exactly as long as the
//! [`ResolvedRepository`] that owns it.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, warn};

use super::git::{GitCloner, RepositoryCloner};
use super::identifier::RepositoryId;
use crate::error::{ApprovalError, Result};

/// A working directory ready for evaluation.
#[derive(Debug)]
pub struct ResolvedRepository {
    id: RepositoryId,
    working_dir: PathBuf,
    temp_dir: Option<TempDir>,
}

impl ResolvedRepository {
    /// Identifier derived from the repository argument.
    pub fn id(&self) -> &RepositoryId {
        &self.id
    }

    /// Absolute path of the module root.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Whether the working directory is a temporary clone.
    pub fn is_temporary(&self) -> bool {
        self.temp_dir.is_some()
    }

    /// Remove the temporary clone now, reporting failures.
    ///
    /// Dropping the value removes it as well, silently.
    pub fn cleanup(self) -> Result<()> {
        if let Some(temp_dir) = self.temp_dir {
            let path = temp_dir.path().to_path_buf();
            temp_dir.close().inspect_err(|e| {
                warn!(path = %path.display(), error = %e, "failed to remove temporary clone");
            })?;
            debug!(path = %path.display(), "removed temporary clone");
        }
        Ok(())
    }
}

/// Resolves repository arguments to working directories.
pub struct RepositoryResolver<C = GitCloner> {
    cloner: C,
}

impl RepositoryResolver<GitCloner> {
    /// Create a resolver that clones with `git`.
    pub fn new(cloner: GitCloner) -> Self {
        Self { cloner }
    }
}

impl<C: RepositoryCloner> RepositoryResolver<C> {
    /// Create a resolver with a custom cloner.
    pub fn with_cloner(cloner: C) -> Self {
        Self { cloner }
    }

    /// Resolve `input` to a working directory.
    ///
    /// An existing directory is used in place. Anything else is treated
    /// as a clone URL and cloned into `<tempdir>/<repo-name>`.
    pub fn resolve(&self, input: &str) -> Result<ResolvedRepository> {
        let local = Path::new(input);
        if local.is_dir() {
            return Self::resolve_local(input, local);
        }

        let id = RepositoryId::parse(input)?;
        let temp_dir = TempDir::new().map_err(|e| ApprovalError::Resolution {
            input: input.to_string(),
            message: format!("cannot create temporary directory: {e}"),
        })?;
        let working_dir = temp_dir.path().join(&id.name);

        debug!(%input, target = %working_dir.display(), "resolving remote repository");

        // On failure `temp_dir` is dropped here, removing any partial clone.
        self.cloner.fetch_into(input, &working_dir)?;

        Ok(ResolvedRepository {
            id,
            working_dir,
            temp_dir: Some(temp_dir),
        })
    }

    fn resolve_local(input: &str, path: &Path) -> Result<ResolvedRepository> {
        let working_dir = path
            .canonicalize()
            .map_err(|e| ApprovalError::Resolution {
                input: input.to_string(),
                message: e.to_string(),
            })?;

        debug!(path = %working_dir.display(), "using local repository");

        Ok(ResolvedRepository {
            id: RepositoryId::for_local(input, &working_dir),
            working_dir,
            temp_dir: None,
        })
    }
}
