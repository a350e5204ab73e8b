//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Operations build reports, then render them to an Output target.

mod find;
mod output;

pub use find::FindReport;
pub use output::{Report, TerminalOutput};
