//! Collect phase - reads object identifiers from descriptors.

use eyre::Result;

use super::COLLECT;
use crate::{
    pipeline::{Phase, ResolutionContext},
    resolver::collect_object_ids,
};

/// Phase that parses every discovered descriptor and merges their object
/// identifiers into one sorted, deduplicated list.
///
/// This phase must run after `DiscoverPhase`.
pub(crate) struct CollectPhase;

impl Phase for CollectPhase {
    fn name(&self) -> &'static str {
        COLLECT
    }

    fn run(&self, ctx: &mut ResolutionContext) -> Result<()> {
        let descriptors = ctx.descriptors.as_ref().ok_or_else(|| {
            eyre::eyre!("descriptors not set - CollectPhase must run after DiscoverPhase")
        })?;

        let object_ids = collect_object_ids(descriptors, &mut ctx.diagnostics);
        ctx.object_ids = Some(object_ids);
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
    fn test_collect_phase_requires_descriptors() {
        let config = ResolutionConfig::new("/src", vec!["AB_".into()]);
        let mut ctx = ResolutionContext::new(config);

        assert!(CollectPhase.run(&mut ctx).is_err());
    }

    #[test]
    fn test_collect_phase_skips_broken_descriptor() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("AB_Good.xml");
        let broken = temp.path().join("AB_Broken.xml");
        fs::write(
            &good,
            "<MetaDataObject><Subsystem><Properties><Content>\
             <Item>Catalog.Foo</Item>\
             </Content></Properties></Subsystem></MetaDataObject>",
        )
        .unwrap();
        fs::write(&broken, "<MetaDataObject><Subsystem></MetaDataObject>").unwrap();

        let config = ResolutionConfig::new(temp.path(), vec!["AB_".into()]);
        let mut ctx = ResolutionContext::new(config);
        ctx.descriptors = Some(vec![broken.clone(), good]);

        CollectPhase.run(&mut ctx).expect("collect should succeed");

        assert_eq!(ctx.object_ids, Some(vec!["Catalog.Foo".to_string()]));
        let warnings = &ctx.diagnostics;
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].location.as_deref(),
            Some(broken.display().to_string().as_str())
        );
    }
}
