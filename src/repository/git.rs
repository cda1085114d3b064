//! Git repository cloning.
//!
//! Clones a remote module into a local directory with a shallow
//! `git clone`, bounded by a deadline.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::{ApprovalError, Result};
use crate::shell::{self, CommandOptions};

/// Something that can materialise a remote repository on disk.
pub trait RepositoryCloner {
    /// Clone `url` into `target`, which must not exist yet.
    fn fetch_into(&self, url: &str, target: &Path) -> Result<()>;
}

/// Clones repositories with the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCloner {
    timeout: Duration,
}

impl GitCloner {
    /// Create a cloner that gives up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Get the clone deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn clone_args(url: &str, target: &Path) -> Vec<String> {
        vec![
            "clone".to_string(),
            "--depth".to_string(),
            "1".to_string(),
            "--quiet".to_string(),
            url.to_string(),
            target.to_string_lossy().into_owned(),
        ]
    }
}

impl Default for GitCloner {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_CLONE_TIMEOUT)
    }
}

impl RepositoryCloner for GitCloner {
    fn fetch_into(&self, url: &str, target: &Path) -> Result<()> {
        let options = CommandOptions {
            // Never block on a credential prompt.
            env: vec![("GIT_TERMINAL_PROMPT".to_string(), "0".to_string())],
            timeout: Some(self.timeout),
            ..Default::default()
        };

        info!(%url, target = %target.display(), "cloning repository");

        let result = shell::run("git", &Self::clone_args(url, target), &options).map_err(|e| {
            ApprovalError::CloneFailed {
                url: url.to_string(),
                message: e.to_string(),
            }
        })?;

        if result.timed_out {
            return Err(ApprovalError::CloneTimedOut {
                url: url.to_string(),
                seconds: self.timeout.as_secs(),
            });
        }

        if !result.success {
            return Err(ApprovalError::CloneFailed {
                url: url.to_string(),
                message: result.stderr.trim().to_string(),
            });
        }

        debug!(duration = ?result.duration, "clone finished");
        Ok(())
    }
}
