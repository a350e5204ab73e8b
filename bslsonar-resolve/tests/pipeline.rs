//! End-to-end resolution over a realistic configuration dump.

use std::{
    fs,
    path::{Path, PathBuf},
};

use bslsonar_core::{ResolutionConfig, parse_prefixes};
use bslsonar_resolve::{LogPlugin, Pipeline};
use tempfile::TempDir;

fn subsystem(items: &[&str]) -> String {
    let items: String = items
        .iter()
        .map(|i| format!("\t\t\t\t<xr:Item xsi:type=\"xr:MDObjectRef\">{i}</xr:Item>\n"))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<MetaDataObject xmlns="http://v8.1c.ru/8.3/MDClasses" xmlns:xr="http://v8.1c.ru/8.3/xcf/readable" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" version="2.17">
	<Subsystem uuid="2f2f3c4e-0000-4000-8000-000000000001">
		<Properties>
			<Name>Subsystem</Name>
			<IncludeInCommandInterface>true</IncludeInCommandInterface>
			<Content>
{items}			</Content>
		</Properties>
		<ChildObjects/>
	</Subsystem>
</MetaDataObject>
"#
    )
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Lay out a small source tree with two owned subsystems and one foreign one.
fn fixture() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = temp.path();

    write(
        root,
        "Subsystems/рн_Продажи.xml",
        &subsystem(&[
            "Catalog.Товары",
            "Document.Заказ",
            "5c1e7b2a-3d4f-4a6b-9c8d-0e1f2a3b4c5d",
        ]),
    );
    write(
        root,
        "Subsystems/пс_Склад.xml",
        &subsystem(&["Catalog.Товары", "CommonModule.Склад", "Report.Удален"]),
    );
    write(root, "Subsystems/Чужая.xml", &subsystem(&["Catalog.Чужой"]));

    write(root, "Catalogs/Товары/Ext/ObjectModule.bsl", "");
    write(root, "Catalogs/Товары/Ext/ManagerModule.bsl", "");
    write(root, "Catalogs/Товары/Forms/Элемент/Ext/Form/Module.bsl", "");
    write(root, "Catalogs/Товары/Forms/Элемент/Ext/Form.xml", "");
    write(root, "Catalogs/Чужой/Ext/ObjectModule.bsl", "");
    write(root, "Documents/Заказ/Ext/ObjectModule.bsl", "");
    write(root, "CommonModules/Склад/Ext/Module.bsl", "");

    temp
}

#[test]
fn test_pipeline_resolves_owned_modules() {
    let temp = fixture();
    let config = ResolutionConfig::new(temp.path(), parse_prefixes("рн_ пс_"));

    let mut ctx = Pipeline::new()
        .plugin(LogPlugin::new())
        .run(config)
        .expect("pipeline should succeed");

    assert_eq!(ctx.descriptor_count(), 2);
    assert_eq!(
        ctx.object_ids.as_deref(),
        Some(
            &[
                "Catalog.Товары".to_string(),
                "CommonModule.Склад".to_string(),
                "Document.Заказ".to_string(),
                "Report.Удален".to_string(),
            ][..]
        )
    );
    assert!(ctx.diagnostics.is_empty());

    let files = ctx.take_files();
    assert_eq!(
        files,
        vec![
            PathBuf::from("Catalogs/Товары/Ext/ManagerModule.bsl"),
            PathBuf::from("Catalogs/Товары/Ext/ObjectModule.bsl"),
            PathBuf::from("Catalogs/Товары/Forms/Элемент/Ext/Form/Module.bsl"),
            PathBuf::from("CommonModules/Склад/Ext/Module.bsl"),
            PathBuf::from("Documents/Заказ/Ext/ObjectModule.bsl"),
        ]
    );
}

#[test]
fn test_pipeline_absolute_paths() {
    let temp = fixture();
    let config =
        ResolutionConfig::new(temp.path(), parse_prefixes("пс_")).with_absolute_paths(true);

    let mut ctx = Pipeline::new().run(config).expect("pipeline should succeed");
    let files = ctx.take_files();

    assert_eq!(files.len(), 4);
    assert!(files.iter().all(|f| f.starts_with(temp.path())));
}

#[test]
fn test_pipeline_unknown_prefix_yields_nothing() {
    let temp = fixture();
    let config = ResolutionConfig::new(temp.path(), parse_prefixes("zz_"));

    let mut ctx = Pipeline::new().run(config).expect("pipeline should succeed");

    assert_eq!(ctx.descriptor_count(), 0);
    assert!(ctx.take_files().is_empty());
    assert!(ctx.diagnostics.is_empty());
}

#[test]
fn test_pipeline_broken_descriptor_is_a_warning() {
    let temp = fixture();
    write(
        temp.path(),
        "Subsystems/рн_Битая.xml",
        "<MetaDataObject><Subsystem></Content></MetaDataObject>",
    );
    let config = ResolutionConfig::new(temp.path(), parse_prefixes("рн_"));

    let mut ctx = Pipeline::new().run(config).expect("pipeline should succeed");

    assert_eq!(ctx.diagnostics.len(), 1);
    assert_eq!(ctx.take_files().len(), 4);
}
