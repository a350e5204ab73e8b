//! Resolution of 1C subsystems into the script modules they own.
//!
//! Given a configuration source tree and a set of subsystem name prefixes,
//! this crate finds the matching subsystem descriptors, reads the metadata
//! objects they list and collects the `*.bsl` modules of those objects.
//!
//! # Module Organization
//!
//! - [`resolver`] - Descriptor discovery and object identifier collection
//! - [`mapper`] - Object identifiers to module files
//! - [`pipeline`] - Phase orchestration with plugin hooks and diagnostics

pub mod mapper;
pub mod pipeline;
pub mod resolver;

pub use mapper::{MODULE_PATTERN, map_to_files};
pub use pipeline::{Diagnostic, LogPlugin, Pipeline, ResolutionContext};
pub use resolver::{
    DESCRIPTOR_EXTENSION, SUBSYSTEMS_DIR, collect_object_ids, descriptor_pattern,
    discover_descriptors, resolve_object_ids,
};
