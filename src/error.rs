//! Error types for checklist evaluation.
//!
//! This module defines [`ApprovalError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Only repository resolution is fatal; see [`ApprovalError::is_resolution_error`]
//! - Missing files are never errors, they become FAIL or OPTIONAL outcomes
//! - Metadata and lint engine failures are caught and reported inline
//! - Use `anyhow::Error` (via `ApprovalError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for checklist evaluation.
#[derive(Debug, Error)]
pub enum ApprovalError {
    /// The repository argument cannot be turned into a working directory.
    #[error("Cannot resolve repository '{input}': {message}")]
    Resolution { input: String, message: String },

    /// `git clone` exited unsuccessfully or could not be started.
    #[error("Git clone of {url} failed: {message}")]
    CloneFailed { url: String, message: String },

    /// `git clone` did not finish before the deadline.
    #[error("Git clone of {url} timed out after {seconds}s")]
    CloneTimedOut { url: String, seconds: u64 },

    /// `metadata.json` exists but is not a JSON object.
    #[error("Failed to parse metadata at {path}: {message}")]
    MetadataParse { path: PathBuf, message: String },

    /// The lint engine could not process a manifest.
    #[error("Lint engine failed on {path}: {message}")]
    LintEngine { path: PathBuf, message: String },

    /// A child process could not be run to completion.
    #[error("Command '{command}' failed: {message}")]
    CommandFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApprovalError {
    /// Whether this error prevents the checklist from running at all.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::Resolution { .. } | Self::CloneFailed { .. } | Self::CloneTimedOut { .. }
        )
    }
}

/// Result type alias for checklist operations.
pub type Result<T> = std::result::Result<T, ApprovalError>;
