//! Rendering of module paths for `sonar.inclusions`.

use std::path::{Path, PathBuf};

use bslsonar_core::to_ascii_escaped;

/// Separator between entries: a comma, then a properties line continuation.
pub const SEPARATOR: &str = ", \\\n";

/// Render one path, escaping non-ASCII characters when `transliterate` is set.
pub fn display_path(path: &Path, transliterate: bool) -> String {
    let raw = path.to_string_lossy();
    if transliterate {
        to_ascii_escaped(&raw)
    } else {
        raw.into_owned()
    }
}

/// Join paths into a single multi-line properties value.
///
/// There is no trailing separator; an empty list gives an empty string.
pub fn serialize(paths: &[PathBuf], transliterate: bool) -> String {
    paths
        .iter()
        .map(|p| display_path(p, transliterate))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_empty() {
        assert_eq!(serialize(&[], false), "");
    }

    #[test]
    fn test_serialize_single_has_no_separator() {
        let paths = vec![PathBuf::from("Catalogs/Foo/Ext/ObjectModule.bsl")];
        assert_eq!(serialize(&paths, false), "Catalogs/Foo/Ext/ObjectModule.bsl");
    }

    #[test]
    fn test_serialize_joins_with_continuation() {
        let paths = vec![PathBuf::from("a.bsl"), PathBuf::from("b.bsl")];
        assert_eq!(serialize(&paths, false), "a.bsl, \\\nb.bsl");
    }

    #[test]
    fn test_serialize_transliterated_is_ascii() {
        let paths = vec![
            PathBuf::from("Catalogs/Товары/Ext/ObjectModule.bsl"),
            PathBuf::from("Documents/Заказ/Ext/ObjectModule.bsl"),
        ];
        let line = serialize(&paths, true);

        assert!(line.is_ascii());
        assert!(line.starts_with("Catalogs/\\u0422\\u043e\\u0432"));
        assert_eq!(line.matches(SEPARATOR).count(), 1);
    }

    #[test]
    fn test_display_path_keeps_unicode_by_default() {
        let path = Path::new("CommonModules/Склад/Ext/Module.bsl");
        assert_eq!(display_path(path, false), "CommonModules/Склад/Ext/Module.bsl");
    }
}
