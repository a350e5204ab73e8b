//! Find operation - subsystem prefixes to an emitted module list.

use std::io::Write;

use bslsonar_core::ResolutionConfig;
use bslsonar_emit::Emitter;
use bslsonar_resolve::{LogPlugin, Pipeline};
use eyre::{Context, Result};
use tracing::info;

use crate::reports::FindReport;

/// Execute the find operation.
///
/// Resolves the modules owned by the configured subsystems and hands them to
/// the output target. Module paths printed to the console go to `stdout`.
///
/// A failed emit is kept in [`FindReport::emitted`] so that resolution
/// warnings are still reported alongside it.
pub fn find(config: ResolutionConfig, logging: bool, stdout: &mut dyn Write) -> Result<FindReport> {
    info!(source_root = %config.source_root().display(), "source files");
    if let Some(path) = config.output().path() {
        info!(file = %path.display(), "sonar-project.properties");
    }

    let mut pipeline = Pipeline::new();
    if logging {
        pipeline = pipeline.plugin(LogPlugin::new());
    }

    let mut ctx = pipeline.run(config).wrap_err("Resolution failed")?;
    let files = ctx.take_files();

    let emitted =
        Emitter::new(ctx.config.output(), ctx.config.transliterate()).emit(&files, stdout);

    let warnings = ctx
        .diagnostics
        .iter()
        .map(|diag| match &diag.location {
            Some(loc) => format!("{}\n  --> {}", diag.message, loc),
            None => diag.message.clone(),
        })
        .collect();

    Ok(FindReport {
        warnings,
        descriptors: ctx.descriptor_count(),
        objects: ctx.object_count(),
        modules: files.len(),
        emitted,
    })
}
