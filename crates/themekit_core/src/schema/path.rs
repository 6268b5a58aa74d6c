//! Dot-notated path resolution over manifest documents.

use serde_json::Value;

/// Resolves a `.`-separated key against a manifest tree.
///
/// - An empty key returns the whole document (root path convention).
/// - A key without `.` is a direct top-level lookup.
/// - Dotted keys descend one mapping per segment; a missing segment or a
///   non-mapping intermediate yields `None` immediately.
pub fn resolve<'a>(document: &'a Value, key: &str) -> Option<&'a Value> {
    if key.is_empty() {
        return Some(document);
    }
    let mut current = document;
    for segment in key.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
