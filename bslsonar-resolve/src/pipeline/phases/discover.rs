//! Discover phase - finds subsystem descriptors.

use eyre::Result;

use super::DISCOVER;
use crate::{
    pipeline::{Phase, ResolutionContext},
    resolver::discover_descriptors,
};

/// Phase that locates descriptor files under `Subsystems/` for every
/// configured prefix.
pub(crate) struct DiscoverPhase;

impl Phase for DiscoverPhase {
    fn name(&self) -> &'static str {
        DISCOVER
    }

    fn run(&self, ctx: &mut ResolutionContext) -> Result<()> {
        let descriptors = discover_descriptors(
            ctx.config.source_root(),
            ctx.config.prefixes(),
            &mut ctx.diagnostics,
        );
        ctx.descriptors = Some(descriptors);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use bslsonar_core::ResolutionConfig;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_discover_phase() {
        let temp = TempDir::new().unwrap();
        let subsystems = temp.path().join("Subsystems");
        fs::create_dir_all(&subsystems).unwrap();
        fs::write(subsystems.join("AB_Sales.xml"), "").unwrap();
        fs::write(subsystems.join("CD_Stock.xml"), "").unwrap();

        let config = ResolutionConfig::new(temp.path(), vec!["AB_".into()]);
        let mut ctx = ResolutionContext::new(config);

        DiscoverPhase.run(&mut ctx).expect("discover should succeed");

        assert_eq!(ctx.descriptors, Some(vec![subsystems.join("AB_Sales.xml")]));
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_discover_phase_without_subsystems_dir_warns() {
        let temp = TempDir::new().unwrap();
        let config = ResolutionConfig::new(temp.path(), vec!["AB_".into()]);
        let mut ctx = ResolutionContext::new(config);

        DiscoverPhase.run(&mut ctx).expect("discover should succeed");

        assert_eq!(ctx.descriptor_count(), 0);
        assert_eq!(ctx.diagnostics.len(), 1);
        assert_eq!(ctx.diagnostics[0].phase, DISCOVER);
    }
}
