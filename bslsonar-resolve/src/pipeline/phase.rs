//! Pipeline phase trait.

use eyre::Result;

use super::ResolutionContext;

/// A phase in the resolution pipeline.
///
/// Each phase reads the output of the previous one from the context and
/// stores its own:
/// - `DiscoverPhase` - finds subsystem descriptors by prefix
/// - `CollectPhase` - reads object identifiers from descriptors
/// - `MapPhase` - maps identifiers to module files
pub(crate) trait Phase {
    /// The name of this phase (used in diagnostics and plugin hooks).
    fn name(&self) -> &'static str;

    /// Run this phase on the resolution context.
    ///
    /// Per-item problems are recorded as diagnostics; an error here aborts
    /// the run.
    fn run(&self, ctx: &mut ResolutionContext) -> Result<()>;
}
