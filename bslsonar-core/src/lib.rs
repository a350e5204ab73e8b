//! Core utilities and types for bslsonar.
//!
//! This crate provides the fundamental types shared across the bslsonar
//! workspace: the resolution config, qualified object identifiers, the
//! directory walker used to find descriptors and modules, and ASCII escaping.

mod ascii;
mod config;
mod object_id;
mod walk;

// Text utilities
pub use ascii::to_ascii_escaped;
// Run configuration
pub use config::{OutputTarget, ResolutionConfig, parse_prefixes};
// Fundamental types
pub use object_id::{ObjectId, ObjectIdError};
// Filesystem matching
pub use walk::{Matches, PathMatcher, WalkError};
