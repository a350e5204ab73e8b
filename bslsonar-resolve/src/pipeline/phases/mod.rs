//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`DiscoverPhase`] - finds subsystem descriptors by name prefix
//! - [`CollectPhase`] - reads, sorts and deduplicates object identifiers
//! - [`MapPhase`] - maps object identifiers to module files

mod collect;
mod discover;
mod map;

pub(crate) use collect::CollectPhase;
pub(crate) use discover::DiscoverPhase;
pub(crate) use map::MapPhase;

/// Name of [`DiscoverPhase`].
pub const DISCOVER: &str = "discover";
/// Name of [`CollectPhase`].
pub const COLLECT: &str = "collect";
/// Name of [`MapPhase`].
pub const MAP: &str = "map";
