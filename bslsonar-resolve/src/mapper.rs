//! Object identifiers to module files.

use std::path::{Path, PathBuf};

use bslsonar_core::{ObjectId, PathMatcher, WalkError};

use crate::pipeline::{Diagnostic, phases::MAP};

/// Glob matching 1C script modules.
pub const MODULE_PATTERN: &str = "*.bsl";

/// Collect the module files of each object, in the order of `object_ids`.
///
/// `Catalog.Foo` is looked up in `source_root/Catalogs/Foo`. Objects without
/// a folder are skipped silently, malformed identifiers are reported and
/// skipped. Unless `absolute_paths` is set, paths are made relative to
/// `source_root`.
///
/// Files reachable through several identifiers are listed once per
/// identifier.
pub fn map_to_files(
    source_root: &Path,
    object_ids: &[String],
    absolute_paths: bool,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<PathBuf>, WalkError> {
    let matcher = PathMatcher::new(MODULE_PATTERN)?;
    let mut files = Vec::new();

    for raw in object_ids {
        let id = match ObjectId::parse(raw) {
            Ok(id) => id,
            Err(err) => {
                diagnostics.push(Diagnostic::from_error(MAP, &err).at(raw.as_str()));
                continue;
            }
        };

        let folder = id.folder(source_root);
        if !folder.is_dir() {
            continue;
        }

        let matches = matcher.find(&folder);
        for problem in &matches.problems {
            diagnostics.push(Diagnostic::from_error(MAP, problem).at(id.to_string()));
        }

        files.extend(matches.paths.into_iter().map(|path| {
            if absolute_paths {
                path
            } else {
                relative_to(path, source_root)
            }
        }));
    }

    Ok(files)
}

fn relative_to(path: PathBuf, base: &Path) -> PathBuf {
    match path.strip_prefix(base) {
        Ok(rel) => rel.to_path_buf(),
        Err(_) => path,
    }
}
