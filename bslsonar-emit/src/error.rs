use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::template::TEMPLATE_PLACEHOLDER;

#[derive(Debug, Error, Diagnostic)]
pub enum EmitError {
    #[error("failed to read template '{}'", .path.display())]
    #[diagnostic(code(bslsonar::emit::read_template))]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template '{name}' has no {} placeholder", TEMPLATE_PLACEHOLDER)]
    #[diagnostic(
        code(bslsonar::emit::missing_placeholder),
        help("put the placeholder where the module list belongs, e.g. after `sonar.inclusions=`")
    )]
    MissingPlaceholder { name: String },

    #[error("failed to read '{}'", .path.display())]
    #[diagnostic(code(bslsonar::emit::read_target))]
    ReadTarget {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}'", .path.display())]
    #[diagnostic(code(bslsonar::emit::write_target))]
    WriteTarget {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to stdout")]
    #[diagnostic(code(bslsonar::emit::stdout))]
    Stdout(#[source] std::io::Error),
}
