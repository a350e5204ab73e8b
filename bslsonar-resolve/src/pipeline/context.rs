//! Resolution context passed through pipeline phases.

use std::path::PathBuf;

use bslsonar_core::ResolutionConfig;

use super::diagnostic::Diagnostic;

/// Context passed through all pipeline phases.
///
/// Each phase fills in its output before the next one reads it, and
/// diagnostics accumulate along the way.
#[derive(Debug)]
pub struct ResolutionContext {
    /// The run configuration.
    pub config: ResolutionConfig,
    /// Subsystem descriptor files (populated by DiscoverPhase).
    pub descriptors: Option<Vec<PathBuf>>,
    /// Sorted, deduplicated object identifiers (populated by CollectPhase).
    pub object_ids: Option<Vec<String>>,
    /// Module files in identifier order (populated by MapPhase).
    pub files: Option<Vec<PathBuf>>,
    /// Diagnostics collected during resolution.
    pub diagnostics: Vec<Diagnostic>,
}

impl ResolutionContext {
    /// Create a new resolution context from a config.
    pub fn new(config: ResolutionConfig) -> Self {
        Self {
            config,
            descriptors: None,
            object_ids: None,
            files: None,
            diagnostics: Vec::new(),
        }
    }

    /// Diagnostics produced by one phase.
    pub fn diagnostics_for<'a>(&'a self, phase: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.phase == phase)
    }

    /// Number of descriptors found, zero before DiscoverPhase.
    pub fn descriptor_count(&self) -> usize {
        self.descriptors.as_ref().map_or(0, Vec::len)
    }

    /// Number of object identifiers, zero before CollectPhase.
    pub fn object_count(&self) -> usize {
        self.object_ids.as_ref().map_or(0, Vec::len)
    }

    /// Number of module files, zero before MapPhase.
    pub fn file_count(&self) -> usize {
        self.files.as_ref().map_or(0, Vec::len)
    }

    /// Take the module files out of the context.
    pub fn take_files(&mut self) -> Vec<PathBuf> {
        self.files.take().unwrap_or_default()
    }
}
