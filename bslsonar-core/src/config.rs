//! Configuration of a single resolution run.

use std::path::{Path, PathBuf};

/// Where the resolved module list goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    /// Print one module path per line.
    #[default]
    Stdout,
    /// Replace the inclusions marker inside an existing properties file.
    Substitute { path: PathBuf },
    /// Render a template and write it to `path`, creating or truncating it.
    /// `None` uses the built-in `sonar-project.properties` template.
    Generate {
        path: PathBuf,
        template: Option<PathBuf>,
    },
}

impl OutputTarget {
    /// The file written by this target, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            OutputTarget::Stdout => None,
            OutputTarget::Substitute { path } | OutputTarget::Generate { path, .. } => Some(path),
        }
    }
}

/// Everything the pipeline needs to know about a run.
///
/// Built once by the CLI and then only read.
#[derive(Debug, Clone)]
pub struct ResolutionConfig {
    source_root: PathBuf,
    prefixes: Vec<String>,
    output: OutputTarget,
    absolute_paths: bool,
    transliterate: bool,
}

impl ResolutionConfig {
    /// Create a config for `source_root` resolving subsystems whose file
    /// names start with one of `prefixes`.
    pub fn new(source_root: impl Into<PathBuf>, prefixes: Vec<String>) -> Self {
        Self {
            source_root: source_root.into(),
            prefixes,
            output: OutputTarget::default(),
            absolute_paths: false,
            transliterate: false,
        }
    }

    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    /// Keep module paths as found instead of relative to the source root.
    pub fn with_absolute_paths(mut self, absolute_paths: bool) -> Self {
        self.absolute_paths = absolute_paths;
        self
    }

    /// Escape non-ASCII characters in emitted paths.
    pub fn with_transliterate(mut self, transliterate: bool) -> Self {
        self.transliterate = transliterate;
        self
    }

    /// Root of the exported configuration (contains `Subsystems/`).
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn output(&self) -> &OutputTarget {
        &self.output
    }

    pub fn absolute_paths(&self) -> bool {
        self.absolute_paths
    }

    pub fn transliterate(&self) -> bool {
        self.transliterate
    }
}

/// Split a raw prefix list such as `"рн_ пс_"` on whitespace.
pub fn parse_prefixes(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefixes() {
        assert_eq!(parse_prefixes("рн_ пс_"), vec!["рн_", "пс_"]);
        assert_eq!(parse_prefixes("  AB_\t CD_  "), vec!["AB_", "CD_"]);
        assert!(parse_prefixes("   ").is_empty());
    }

    #[test]
    fn test_builder_defaults() {
        let config = ResolutionConfig::new("/src", vec!["AB_".into()]);

        assert_eq!(config.source_root(), Path::new("/src"));
        assert_eq!(config.output(), &OutputTarget::Stdout);
        assert!(!config.absolute_paths());
        assert!(!config.transliterate());
    }

    #[test]
    fn test_output_path() {
        let target = OutputTarget::Generate {
            path: "sonar-project.properties".into(),
            template: None,
        };
        assert_eq!(target.path(), Some(Path::new("sonar-project.properties")));
        assert_eq!(OutputTarget::Stdout.path(), None);
    }
}
