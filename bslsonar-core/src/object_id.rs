//! Qualified metadata object identifiers such as `Catalog.Products`.

use std::{
    fmt,
    path::{Component, Path, PathBuf},
};

use thiserror::Error;

/// Reasons an identifier cannot be mapped to a folder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectIdError {
    #[error("object identifier '{0}' has no type separator '.'")]
    MissingDot(String),

    #[error("object identifier '{0}' has an empty type")]
    EmptyType(String),

    #[error("object identifier '{0}' has an empty name")]
    EmptyName(String),

    #[error("object identifier '{0}' does not name a folder inside the source tree")]
    InvalidPath(String),
}

/// A `<Type>.<Name>` identifier read from a subsystem descriptor.
///
/// The type tag maps to the export folder by appending `s`
/// (`Catalog` -> `Catalogs`). The name is everything after the first dot,
/// so `CommonModule.A.B` names the object `A.B`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId {
    type_tag: String,
    name: String,
}

impl ObjectId {
    /// Split `raw` at its first dot.
    pub fn parse(raw: &str) -> Result<Self, ObjectIdError> {
        let (type_tag, name) = raw
            .split_once('.')
            .ok_or_else(|| ObjectIdError::MissingDot(raw.to_string()))?;

        if type_tag.is_empty() {
            return Err(ObjectIdError::EmptyType(raw.to_string()));
        }
        if name.is_empty() {
            return Err(ObjectIdError::EmptyName(raw.to_string()));
        }
        if !is_plain_relative(type_tag) || !is_plain_relative(name) {
            return Err(ObjectIdError::InvalidPath(raw.to_string()));
        }

        Ok(Self {
            type_tag: type_tag.to_string(),
            name: name.to_string(),
        })
    }

    /// The pluralized export folder for this type, e.g. `Catalogs`.
    fn folder_type(&self) -> String {
        format!("{}s", self.type_tag)
    }

    fn relative_folder(&self) -> PathBuf {
        Path::new(&self.folder_type()).join(&self.name)
    }

    /// Folder of this object under `source_root`.
    pub fn folder(&self, source_root: &Path) -> PathBuf {
        source_root.join(self.relative_folder())
    }
}

/// Whether joining `part` onto a directory stays below that directory.
fn is_plain_relative(part: &str) -> bool {
    Path::new(part)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_tag, self.name)
    }
}
