//! Subsystem descriptor files (`Subsystems/**/<Name>.xml`).

use std::path::Path;

use quick_xml::{Reader, events::Event};

use crate::{Error, Result, marker::is_live_item};

/// Element path, below the document root, of the subsystem content items.
const ITEM_PATH: [&[u8]; 4] = [b"Subsystem", b"Properties", b"Content", b"Item"];

/// A parsed subsystem descriptor.
///
/// Only the `Subsystem/Properties/Content/Item` entries are read; the rest
/// of the document is ignored.
#[derive(Debug, Clone)]
pub struct SubsystemDescriptor {
    items: Vec<String>,
}

impl SubsystemDescriptor {
    /// Open and parse a descriptor file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let items = parse_items(&content, &path.display().to_string())?;

        Ok(Self { items })
    }

    /// Consume the descriptor, keeping only live object identifiers.
    pub fn into_object_ids(self) -> Vec<String> {
        self.items
            .into_iter()
            .filter(|item| is_live_item(item))
            .collect()
    }
}

/// Read the live object identifiers listed by the descriptor at `path`.
pub fn extract_object_ids(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(SubsystemDescriptor::open(path)?.into_object_ids())
}

fn parse_items(content: &str, filename: &str) -> Result<Vec<String>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = Reader::from_str(content);

    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut seen_root = false;
    let mut current: Option<String> = None;
    let mut items = Vec::new();

    loop {
        let offset = reader.buffer_position() as usize;
        let event = reader
            .read_event()
            .map_err(|e| Error::parse(e, content, filename, offset))?;

        match event {
            Event::Start(e) => {
                seen_root = true;
                stack.push(e.local_name().as_ref().to_vec());
                if is_item_path(&stack) {
                    current = Some(String::new());
                }
            }
            Event::Empty(_) => seen_root = true,
            Event::Text(t) if is_item_path(&stack) => {
                if let Some(buf) = current.as_mut() {
                    let text = t.unescape().map_err(|e| {
                        Error::parse(quick_xml::Error::from(e), content, filename, offset)
                    })?;
                    buf.push_str(&text);
                }
            }
            Event::CData(c) if is_item_path(&stack) => {
                if let Some(buf) = current.as_mut() {
                    buf.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Event::End(_) => {
                if is_item_path(&stack) {
                    if let Some(text) = current.take() {
                        items.push(text.trim().to_string());
                    }
                }
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(Error::missing_root(content, filename));
    }

    Ok(items)
}

/// Whether the open elements are `<root>/Subsystem/Properties/Content/Item`.
fn is_item_path(stack: &[Vec<u8>]) -> bool {
    stack.len() == ITEM_PATH.len() + 1
        && stack[1..]
            .iter()
            .zip(ITEM_PATH)
            .all(|(open, expected)| open.as_slice() == expected)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const DESCRIPTOR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<MetaDataObject xmlns="http://v8.1c.ru/8.3/MDClasses" xmlns:xr="http://v8.1c.ru/8.3/xcf/readable" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" version="2.10">
	<Subsystem uuid="0d4a2c8e-41f5-4b1e-9c3a-7e6f5d4c3b2a">
		<Properties>
			<Name>рн_Супер</Name>
			<IncludeInCommandInterface>true</IncludeInCommandInterface>
			<Content>
				<xr:Item xsi:type="xr:MDObjectRef">Catalog.Справочник8</xr:Item>
				<xr:Item xsi:type="xr:MDObjectRef">Document.Документ1</xr:Item>
				<xr:Item xsi:type="xr:MDObjectRef">3f2b4c1a-9d8e-4f7a-b6c5-0123456789ab</xr:Item>
				<xr:Item xsi:type="xr:MDObjectRef"></xr:Item>
			</Content>
		</Properties>
		<ChildObjects>
			<Item>Subsystem.Вложенная</Item>
		</ChildObjects>
	</Subsystem>
</MetaDataObject>
"#;

    #[test]
    fn test_parse_reads_content_items() {
        let items = parse_items(DESCRIPTOR, "рн_Супер.xml").unwrap();

        assert_eq!(
            items,
            [
                "Catalog.Справочник8",
                "Document.Документ1",
                "3f2b4c1a-9d8e-4f7a-b6c5-0123456789ab",
                ""
            ]
        );
    }

    #[test]
    fn test_object_ids_skip_deleted_and_empty() {
        let descriptor = SubsystemDescriptor {
            items: parse_items(DESCRIPTOR, "рн_Супер.xml").unwrap(),
        };

        assert_eq!(
            descriptor.into_object_ids(),
            vec!["Catalog.Справочник8", "Document.Документ1"]
        );
    }

    #[test]
    fn test_parse_tolerates_bom_and_cdata() {
        let content = "\u{feff}<MetaDataObject><Subsystem><Properties><Content>\
            <Item><![CDATA[CommonModule.Общий]]></Item>\
            <Item>Report.Отчет &amp; Ко</Item>\
            </Content></Properties></Subsystem></MetaDataObject>";

        let items = parse_items(content, "x.xml").unwrap();

        assert_eq!(
            items,
            ["CommonModule.Общий", "Report.Отчет & Ко"]
        );
    }

    #[test]
    fn test_parse_without_content_is_empty() {
        let content = "<MetaDataObject><Subsystem><Properties><Content/></Properties></Subsystem></MetaDataObject>";

        assert!(parse_items(content, "x.xml").unwrap().is_empty());
    }

    #[test]
    fn test_parse_mismatched_tags_is_error() {
        let content = "<MetaDataObject><Subsystem></Properties></MetaDataObject>";

        let err = parse_items(content, "broken.xml").unwrap_err();

        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_parse_empty_document_is_error() {
        let err = parse_items("", "empty.xml").unwrap_err();

        assert!(matches!(*err, Error::MissingRoot { .. }));
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();

        let err = extract_object_ids(temp.path().join("missing.xml")).unwrap_err();

        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_extract_object_ids_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("рн_Супер.xml");
        fs::write(&path, DESCRIPTOR).unwrap();

        let ids = extract_object_ids(&path).unwrap();

        assert_eq!(ids, vec!["Catalog.Справочник8", "Document.Документ1"]);
    }
}
