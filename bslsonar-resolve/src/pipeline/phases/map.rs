//! Map phase - turns object identifiers into module files.

use eyre::{Context, Result};

use super::MAP;
use crate::{
    mapper::map_to_files,
    pipeline::{Phase, ResolutionContext},
};

/// Phase that collects the `*.bsl` modules of every resolved object.
///
/// This phase must run after `CollectPhase`.
pub(crate) struct MapPhase;

impl Phase for MapPhase {
    fn name(&self) -> &'static str {
        MAP
    }

    fn run(&self, ctx: &mut ResolutionContext) -> Result<()> {
        let object_ids = ctx.object_ids.as_ref().ok_or_else(|| {
            eyre::eyre!("object ids not set - MapPhase must run after CollectPhase")
        })?;

        let files = map_to_files(
            ctx.config.source_root(),
            object_ids,
            ctx.config.absolute_paths(),
            &mut ctx.diagnostics,
        )
        .wrap_err("Failed to map objects to modules")?;

        ctx.files = Some(files);
        Ok(())
    }
}
