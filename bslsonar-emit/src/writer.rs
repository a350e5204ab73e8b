//! Delivery of the module list to its output target.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use bslsonar_core::OutputTarget;

use crate::{
    EmitError, PropertiesFile, Template,
    properties::INCLUSIONS_MARKER,
    serialize::{display_path, serialize},
};

/// What an [`Emitter`] did with the module list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitted {
    /// Paths were printed one per line.
    Printed { count: usize },
    /// Markers in an existing file were replaced.
    Substituted { path: PathBuf, replacements: usize },
    /// A new file was rendered from a template.
    Generated { path: PathBuf },
}

/// Writes resolved module paths according to an [`OutputTarget`].
pub struct Emitter<'a> {
    target: &'a OutputTarget,
    transliterate: bool,
}

impl<'a> Emitter<'a> {
    pub fn new(target: &'a OutputTarget, transliterate: bool) -> Self {
        Self {
            target,
            transliterate,
        }
    }

    /// Emit `files`. Console output goes to `stdout`; file targets are
    /// written directly.
    pub fn emit(&self, files: &[PathBuf], stdout: &mut dyn Write) -> Result<Emitted, EmitError> {
        match self.target {
            OutputTarget::Stdout => self.print(files, stdout),
            OutputTarget::Substitute { path } => self.substitute(path, files),
            OutputTarget::Generate { path, template } => {
                self.generate(path, template.as_deref(), files)
            }
        }
    }

    fn print(&self, files: &[PathBuf], stdout: &mut dyn Write) -> Result<Emitted, EmitError> {
        for file in files {
            writeln!(stdout, "{}", display_path(file, self.transliterate))
                .map_err(EmitError::Stdout)?;
        }
        stdout.flush().map_err(EmitError::Stdout)?;

        Ok(Emitted::Printed { count: files.len() })
    }

    fn substitute(&self, path: &Path, files: &[PathBuf]) -> Result<Emitted, EmitError> {
        let mut properties = PropertiesFile::open(path)?;
        let replacements =
            properties.substitute(INCLUSIONS_MARKER, &serialize(files, self.transliterate));
        properties.save()?;

        Ok(Emitted::Substituted {
            path: path.to_path_buf(),
            replacements,
        })
    }

    fn generate(
        &self,
        path: &Path,
        template: Option<&Path>,
        files: &[PathBuf],
    ) -> Result<Emitted, EmitError> {
        let template = match template {
            Some(custom) => Template::open(custom)?,
            None => Template::builtin(),
        };
        let content = template.render(&serialize(files, self.transliterate))?;
        PropertiesFile::new(path, content).save()?;

        Ok(Emitted::Generated {
            path: path.to_path_buf(),
        })
    }
}
