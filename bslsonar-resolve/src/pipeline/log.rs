//! Logging plugin.
//!
//! Phases never log on their own; they record diagnostics in the context.
//! Adding a [`LogPlugin`] to the pipeline turns those records into
//! `tracing` events as each phase finishes.

use eyre::Result;

use super::{
    Plugin, ResolutionContext,
    phases::{COLLECT, DISCOVER, MAP},
};

/// Emits `tracing` events for every phase and its diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPlugin;

impl LogPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for LogPlugin {
    fn on_before_phase(&self, phase: &str, _ctx: &mut ResolutionContext) -> Result<()> {
        tracing::debug!(phase, "phase started");
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut ResolutionContext) -> Result<()> {
        if phase == DISCOVER {
            for path in ctx.descriptors.iter().flatten() {
                tracing::debug!(descriptor = %path.display(), "subsystem descriptor");
            }
        }

        for diag in ctx.diagnostics_for(phase) {
            let location = diag.location.as_deref().unwrap_or_default();
            tracing::warn!(phase, location, "{}", diag.message);
        }

        match phase {
            DISCOVER => tracing::info!(count = ctx.descriptor_count(), "subsystems found for analysis"),
            COLLECT => tracing::info!(count = ctx.object_count(), "objects found for analysis"),
            MAP => tracing::info!(count = ctx.file_count(), "bsl modules to check"),
            _ => tracing::debug!(phase, "phase finished"),
        }

        Ok(())
    }
}
