//! Recursive glob matching over a directory tree.

use std::{
    fs,
    path::{Path, PathBuf},
};

use globset::{GlobBuilder, GlobMatcher};
use thiserror::Error;
use walkdir::WalkDir;

/// Errors raised while matching files.
///
/// Only [`WalkError::Pattern`] is returned directly. Walk and read failures
/// are collected in [`Matches::problems`] so a single unreadable directory
/// does not abort the whole search.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("invalid glob pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("cannot walk '{}'", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("cannot read directory '{}'", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Files found by a [`PathMatcher`], plus anything that could not be read.
#[derive(Debug, Default)]
pub struct Matches {
    /// Matching entries in directory-visitation order.
    pub paths: Vec<PathBuf>,
    /// Directories that could not be walked or listed.
    pub problems: Vec<WalkError>,
}

/// A compiled file-name glob applied to every directory of a tree.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    matcher: GlobMatcher,
}

impl PathMatcher {
    /// Compile a glob such as `*.bsl` or `AB_*.xml`.
    pub fn new(pattern: impl Into<String>) -> Result<Self, WalkError> {
        let pattern = pattern.into();
        let matcher = GlobBuilder::new(&pattern)
            .literal_separator(true)
            .build()
            .map_err(|source| WalkError::Pattern {
                pattern: pattern.clone(),
                source,
            })?
            .compile_matcher();

        Ok(Self { matcher })
    }

    /// Find entries under `root` whose file name matches the pattern.
    ///
    /// Directories are visited pre-order with siblings in name order, `root`
    /// included. Within each directory only the direct children are tested,
    /// and its matches are appended sorted by name before the walk descends.
    pub fn find(&self, root: &Path) -> Matches {
        let mut matches = Matches::default();

        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(source) => {
                    let path = source.path().unwrap_or(root).to_path_buf();
                    matches.problems.push(WalkError::Walk { path, source });
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                self.collect_dir(entry.path(), &mut matches);
            }
        }

        matches
    }

    fn collect_dir(&self, dir: &Path, matches: &mut Matches) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(source) => {
                matches.problems.push(WalkError::ReadDir {
                    path: dir.to_path_buf(),
                    source,
                });
                return;
            }
        };

        let mut found: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| self.matcher.is_match(entry.file_name()))
            .map(|entry| entry.path())
            .collect();
        found.sort();

        matches.paths.extend(found);
    }
}
