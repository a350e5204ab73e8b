use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for descriptor operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{}'", .path.display())]
    #[diagnostic(code(bslsonar::descriptor::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse subsystem descriptor")]
    #[diagnostic(code(bslsonar::descriptor::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: quick_xml::Error,
    },

    #[error("subsystem descriptor has no root element")]
    #[diagnostic(
        code(bslsonar::descriptor::empty),
        help("descriptors are exported as <MetaDataObject><Subsystem>...</Subsystem></MetaDataObject>")
    )]
    MissingRoot {
        #[source_code]
        src: NamedSource<String>,
    },
}

impl Error {
    /// Create a parse error at a byte offset of the source
    pub fn parse(source: quick_xml::Error, src: &str, filename: &str, offset: usize) -> Box<Self> {
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span: Some(SourceSpan::from(offset.min(src.len()))),
            source,
        })
    }

    /// Create an error for a document without any element
    pub fn missing_root(src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::MissingRoot {
            src: NamedSource::new(filename, src.to_string()),
        })
    }
}
