//! Pipeline orchestrator.

use bslsonar_core::ResolutionConfig;
use eyre::Result;

use super::{
    Phase, Plugin, ResolutionContext,
    phases::{CollectPhase, DiscoverPhase, MapPhase},
};

/// The resolution pipeline orchestrator.
///
/// The pipeline runs discover, collect and map in that order, calling
/// plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(LogPlugin::new());
///
/// let mut ctx = pipeline.run(config)?;
/// let files = ctx.take_files();
/// ```
pub struct Pipeline {
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline without plugins.
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline for a config.
    ///
    /// # Errors
    ///
    /// Returns an error if a phase or a plugin hook fails.
    pub fn run(&self, config: ResolutionConfig) -> Result<ResolutionContext> {
        let mut ctx = ResolutionContext::new(config);

        self.run_phase(&DiscoverPhase, &mut ctx)?;
        self.run_phase(&CollectPhase, &mut ctx)?;
        self.run_phase(&MapPhase, &mut ctx)?;

        Ok(ctx)
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut ResolutionContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
