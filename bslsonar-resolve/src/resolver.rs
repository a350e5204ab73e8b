//! Subsystem resolution: prefixes to object identifiers.

use std::path::{Path, PathBuf};

use bslsonar_core::PathMatcher;
use bslsonar_descriptor::extract_object_ids;

use crate::pipeline::{
    Diagnostic,
    phases::{COLLECT, DISCOVER},
};

/// Folder of the source tree holding subsystem descriptors.
pub const SUBSYSTEMS_DIR: &str = "Subsystems";

/// Extension of subsystem descriptor files.
pub const DESCRIPTOR_EXTENSION: &str = "xml";

/// Glob matching descriptors whose name starts with `prefix`.
pub fn descriptor_pattern(prefix: &str) -> String {
    format!("{prefix}*.{DESCRIPTOR_EXTENSION}")
}

/// Find the descriptors under `source_root/Subsystems` matching any prefix.
///
/// Prefixes are searched in order. A descriptor matching several prefixes
/// is listed once per prefix; duplicates disappear once identifiers are
/// deduplicated.
pub fn discover_descriptors(
    source_root: &Path,
    prefixes: &[String],
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<PathBuf> {
    let root = source_root.join(SUBSYSTEMS_DIR);
    if !root.is_dir() {
        diagnostics.push(
            Diagnostic::warning(DISCOVER, "no subsystems directory in the source tree")
                .at(root.display().to_string()),
        );
        return Vec::new();
    }

    let mut descriptors = Vec::new();
    for prefix in prefixes {
        let matcher = match PathMatcher::new(descriptor_pattern(prefix)) {
            Ok(m) => m,
            Err(err) => {
                diagnostics.push(Diagnostic::from_error(DISCOVER, &err).at(prefix.as_str()));
                continue;
            }
        };

        let matches = matcher.find(&root);
        for problem in &matches.problems {
            diagnostics.push(Diagnostic::from_error(DISCOVER, problem));
        }
        descriptors.extend(matches.paths);
    }

    descriptors
}

/// Read object identifiers from every descriptor, then sort and deduplicate.
///
/// A descriptor that cannot be read or parsed is reported and skipped.
pub fn collect_object_ids(descriptors: &[PathBuf], diagnostics: &mut Vec<Diagnostic>) -> Vec<String> {
    let mut object_ids = Vec::new();

    for path in descriptors {
        match extract_object_ids(path) {
            Ok(ids) => object_ids.extend(ids),
            Err(err) => diagnostics
                .push(Diagnostic::from_error(COLLECT, &*err).at(path.display().to_string())),
        }
    }

    object_ids.sort();
    object_ids.dedup();
    object_ids
}

/// Resolve the object identifiers of all subsystems matching `prefixes`.
///
/// The result is sorted ascending with no repeated value. No prefixes or no
/// matching descriptors give an empty list.
pub fn resolve_object_ids(
    source_root: &Path,
    prefixes: &[String],
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<String> {
    let descriptors = discover_descriptors(source_root, prefixes, diagnostics);
    collect_object_ids(&descriptors, diagnostics)
}
