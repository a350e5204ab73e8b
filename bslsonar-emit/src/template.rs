//! `sonar-project.properties` templates.

use std::path::Path;

use crate::EmitError;

/// Placeholder replaced by the serialized module list.
pub const TEMPLATE_PLACEHOLDER: &str = "{{inclusions}}";

const BUILTIN_NAME: &str = "sonar-project.properties";
const BUILTIN: &str = include_str!("../templates/sonar-project.properties");

/// A properties template with an inclusions placeholder.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    /// The template shipped with bslsonar.
    pub fn builtin() -> Self {
        Self {
            name: BUILTIN_NAME.to_string(),
            content: BUILTIN.to_string(),
        }
    }

    /// Load a user-provided template.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EmitError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| EmitError::ReadTemplate {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            name: path.display().to_string(),
            content,
        })
    }

    /// Fill the placeholder with `inclusions`.
    pub fn render(&self, inclusions: &str) -> Result<String, EmitError> {
        if !self.content.contains(TEMPLATE_PLACEHOLDER) {
            return Err(EmitError::MissingPlaceholder {
                name: self.name.clone(),
            });
        }

        Ok(self.content.replace(TEMPLATE_PLACEHOLDER, inclusions))
    }
}
