//! README and LICENSE documents.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The module README.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeDocument {
    /// Path of the README that was loaded.
    pub path: PathBuf,
    text: String,
    lowercase: String,
}

impl ReadmeDocument {
    /// Create a README from its text.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let text = text.into();
        let lowercase = text.to_lowercase();
        Self {
            path: path.into(),
            text,
            lowercase,
        }
    }

    /// Read a README, replacing invalid UTF-8.
    pub fn read(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::new(path, String::from_utf8_lossy(&bytes)))
    }

    /// The README text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Case-insensitive substring search.
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.lowercase.contains(&needle.to_lowercase())
    }

    /// Whether the README has a `## <name>` heading, ignoring case.
    pub fn has_section(&self, name: &str) -> bool {
        self.contains_ignore_case(&format!("## {name}"))
    }
}

/// The module LICENSE file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseFile {
    /// Path of the LICENSE file.
    pub path: PathBuf,
}

impl LicenseFile {
    /// Read the license text, replacing invalid UTF-8.
    pub fn read_text(&self) -> io::Result<String> {
        let bytes = fs::read(&self.path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
