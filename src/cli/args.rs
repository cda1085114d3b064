//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;

/// Evaluate a Puppet module repository against the Puppet Approved checklist.
///
/// Without a repository, prints the checklist criteria.
#[derive(Debug, Parser)]
#[command(name = "approved")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Local module directory or git URL to clone
    pub repository: Option<String>,
}
