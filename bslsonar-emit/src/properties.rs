//! An existing `sonar-project.properties` file.

use std::path::{Path, PathBuf};

use crate::EmitError;

/// Marker replaced in place when updating an existing properties file.
pub const INCLUSIONS_MARKER: &str = "$inclusions_line";

/// A properties file held in memory between reading and saving.
#[derive(Debug, Clone)]
pub struct PropertiesFile {
    path: PathBuf,
    content: String,
}

impl PropertiesFile {
    /// Create a file that does not exist on disk yet.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Read an existing properties file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EmitError> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|source| EmitError::ReadTarget {
            path: path.clone(),
            source,
        })?;

        Ok(Self { path, content })
    }

    /// Replace every occurrence of `marker` with `value`.
    ///
    /// Returns the number of replacements. Content outside the markers is
    /// left untouched.
    pub fn substitute(&mut self, marker: &str, value: &str) -> usize {
        let count = self.content.matches(marker).count();
        if count > 0 {
            self.content = self.content.replace(marker, value);
        }
        count
    }

    /// Save the current content to disk, creating or truncating the file.
    pub fn save(&self) -> Result<(), EmitError> {
        std::fs::write(&self.path, &self.content).map_err(|source| EmitError::WriteTarget {
            path: self.path.clone(),
            source,
        })
    }
}
