// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing of 1C subsystem descriptor files.
//!
//! A descriptor lists the metadata objects that belong to a subsystem as
//! `Type.Name` items. Items left behind by deleted objects hold a UUID
//! instead and are filtered out.

mod descriptor;
mod error;
mod marker;

pub use descriptor::{SubsystemDescriptor, extract_object_ids};
pub use error::{Error, Result};
