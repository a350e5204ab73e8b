//! Pipeline plugin trait.

use eyre::Result;

use super::ResolutionContext;

/// Hooks called around each pipeline phase.
///
/// `phase` is the name of the phase (`"discover"`, `"collect"` or `"map"`).
/// Both hooks may inspect or modify the context; returning an error aborts
/// the pipeline.
pub trait Plugin: Send + Sync {
    /// Called before a phase runs.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut ResolutionContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut ResolutionContext) -> Result<()> {
        Ok(())
    }
}
