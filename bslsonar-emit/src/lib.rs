//! Output of resolved module lists for SonarQube.
//!
//! Modules are either printed, substituted into an existing
//! `sonar-project.properties` at its `$inclusions_line` markers, or rendered
//! into a new file from a template.

mod error;
pub mod properties;
pub mod serialize;
pub mod template;
pub mod writer;

pub use error::EmitError;
pub use properties::{INCLUSIONS_MARKER, PropertiesFile};
pub use serialize::{SEPARATOR, display_path, serialize};
pub use template::{TEMPLATE_PLACEHOLDER, Template};
pub use writer::{Emitted, Emitter};
