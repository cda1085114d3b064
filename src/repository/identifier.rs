//! Repository identifiers.

use std::path::Path;

use crate::error::{ApprovalError, Result};

/// The repository argument and the names derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryId {
    /// The argument exactly as given on the command line.
    pub input: String,
    /// Final path segment without a trailing `.git`.
    pub name: String,
    /// Segment before the name (user or organisation), if any.
    pub owner: Option<String>,
}

impl RepositoryId {
    /// Derive the identifier of a remote repository URL.
    ///
    /// Accepts `https://host/org/repo.git`, `git@host:org/repo.git` and
    /// plain paths. Fails when no repository name can be derived.
    pub fn parse(input: &str) -> Result<Self> {
        let segments: Vec<&str> = input
            .trim()
            .split(['/', '\\', ':'])
            .filter(|s| !s.is_empty())
            .collect();

        let name = segments
            .last()
            .map(|s| s.strip_suffix(".git").unwrap_or(*s))
            .unwrap_or_default();

        if name.is_empty() {
            return Err(ApprovalError::Resolution {
                input: input.to_string(),
                message: "cannot derive a repository name".to_string(),
            });
        }

        let owner = segments
            .len()
            .checked_sub(2)
            .and_then(|i| segments.get(i))
            .map(|s| s.to_string());

        Ok(Self {
            input: input.to_string(),
            name: name.to_string(),
            owner,
        })
    }

    /// Derive the identifier of a local checkout from its canonical path.
    pub fn for_local(input: &str, canonical: &Path) -> Self {
        let name = canonical
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.to_string());
        let owner = canonical
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned());

        Self {
            input: input.to_string(),
            name,
            owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parses_https_url() {
        let id = RepositoryId::parse("https://github.com/puppetlabs/puppetlabs-ntp.git").unwrap();
        assert_eq!(id.name, "puppetlabs-ntp");
        assert_eq!(id.owner.as_deref(), Some("puppetlabs"));
        assert_eq!(id.input, "https://github.com/puppetlabs/puppetlabs-ntp.git");
    }

    #[test]
    fn parses_url_without_git_suffix() {
        let id = RepositoryId::parse("https://github.com/voxpupuli/puppet-nginx").unwrap();
        assert_eq!(id.name, "puppet-nginx");
        assert_eq!(id.owner.as_deref(), Some("voxpupuli"));
    }

    #[test]
    fn parses_scp_style_url() {
        let id = RepositoryId::parse("git@github.com:puppetlabs/puppetlabs-apache.git").unwrap();
        assert_eq!(id.name, "puppetlabs-apache");
        assert_eq!(id.owner.as_deref(), Some("puppetlabs"));
    }

    #[test]
    fn ignores_trailing_slash() {
        let id = RepositoryId::parse("https://example.com/org/repo/").unwrap();
        assert_eq!(id.name, "repo");
    }

    #[test]
    fn single_segment_has_no_owner() {
        let id = RepositoryId::parse("repo.git").unwrap();
        assert_eq!(id.name, "repo");
        assert!(id.owner.is_none());
    }

    #[test]
    fn empty_name_is_resolution_error() {
        for input in ["", "/", "https://example.com/org/.git", "   "] {
            let err = RepositoryId::parse(input).unwrap_err();
            assert!(err.is_resolution_error(), "input {input:?} should fail");
        }
    }

    #[test]
    fn local_identifier_uses_canonical_path() {
        let id = RepositoryId::for_local(".", &PathBuf::from("/src/modules/ntp"));
        assert_eq!(id.input, ".");
        assert_eq!(id.name, "ntp");
        assert_eq!(id.owner.as_deref(), Some("modules"));
    }
}
