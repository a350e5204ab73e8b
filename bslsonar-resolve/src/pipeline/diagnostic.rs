//! Diagnostic types for the resolution pipeline.
//!
//! Recoverable problems met while resolving (an unreadable descriptor, a
//! malformed identifier, a missing directory) are recorded here instead of
//! aborting the run. Every diagnostic is a warning: the item is skipped and
//! the run continues.

use std::error::Error as StdError;

/// A warning from a pipeline phase.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The phase that produced this diagnostic.
    pub phase: &'static str,
    /// The diagnostic message.
    pub message: String,
    /// Optional location (a descriptor path or an object identifier).
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(phase: &'static str, message: impl Into<String>) -> Self {
        Self {
            phase,
            message: message.into(),
            location: None,
        }
    }

    /// Create a warning from an error and its chain of sources.
    pub fn from_error(phase: &'static str, err: &dyn StdError) -> Self {
        Self::warning(phase, describe(err))
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "warning: {}", self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

/// Join an error with its sources: `outer: inner: root cause`.
///
/// A cause whose text already ends the message is skipped, since some
/// errors print their source themselves.
fn describe(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
