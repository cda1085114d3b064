//! Repository acquisition.
//!
//! - [`RepositoryId`] - names derived from the repository argument
//! - [`RepositoryResolver`] - local path or temporary clone
//! - [`GitCloner`] - shallow `git clone` with a deadline

pub mod git;
pub mod identifier;
pub mod resolver;

pub use git::{GitCloner, RepositoryCloner};
pub use identifier::RepositoryId;
pub use resolver::{RepositoryResolver, ResolvedRepository};
