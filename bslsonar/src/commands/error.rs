use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Invalid command-line arguments, reported before any work starts.
#[derive(Debug, Error, Diagnostic)]
pub enum ArgsError {
    #[error("path '{}' doesn't exist", .0.display())]
    #[diagnostic(code(bslsonar::args::source_missing))]
    SourceMissing(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    #[diagnostic(
        code(bslsonar::args::source_not_dir),
        help("SRCDIR is the root of the configuration dump, the folder holding `Subsystems`")
    )]
    SourceNotDirectory(PathBuf),

    #[error("must be at least 3 characters of prefixes")]
    #[diagnostic(
        code(bslsonar::args::prefixes),
        help("pass subsystem name prefixes separated by spaces, e.g. \"рн_ пс_\"")
    )]
    PrefixesTooShort,

    #[error("can't use --generate without --file")]
    #[diagnostic(
        code(bslsonar::args::generate_without_file),
        help("--file names the properties file the template is rendered to")
    )]
    GenerateWithoutFile,

    #[error("file not found: '{}'", .0.display())]
    #[diagnostic(
        code(bslsonar::args::file_not_found),
        help("without --generate, --file must be an existing sonar-project.properties")
    )]
    FileNotFound(PathBuf),
}
