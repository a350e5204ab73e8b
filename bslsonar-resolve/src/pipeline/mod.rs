//! Resolution pipeline.
//!
//! This module provides a [`Pipeline`] orchestrator that manages the phases
//! from subsystem discovery to module collection. The pipeline provides:
//!
//! - Explicit phase boundaries (discover → collect → map)
//! - Plugin hooks before and after each phase
//! - Unified diagnostics collection
//! - Shared state via [`ResolutionContext`]
//!
//! # Example
//!
//! ```ignore
//! use bslsonar_resolve::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::new();
//! let mut ctx = pipeline.run(config)?;
//!
//! for diag in &ctx.diagnostics {
//!     eprintln!("{diag}");
//! }
//!
//! let files = ctx.take_files();
//! ```

mod context;
mod diagnostic;
mod log;
mod phase;
pub(crate) mod phases;
mod plugin;
mod runner;

pub use context::ResolutionContext;
pub use diagnostic::Diagnostic;
pub use log::LogPlugin;
pub(crate) use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
