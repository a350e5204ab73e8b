//! Recognition of deleted-object markers.
//!
//! When an object is removed from a configuration, subsystems that listed it
//! keep an item holding the object's UUID instead of its `Type.Name`.

use once_cell::sync::Lazy;
use regex::Regex;

static DELETED_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}")
        .expect("uuid pattern is valid")
});

/// Whether `item` contains a UUID in canonical 8-4-4-4-12 form.
pub(crate) fn is_deleted_marker(item: &str) -> bool {
    DELETED_MARKER.is_match(item)
}

/// Whether `item` can name a live object: non-empty and not a deleted marker.
pub(crate) fn is_live_item(item: &str) -> bool {
    !item.is_empty() && !is_deleted_marker(item)
}
