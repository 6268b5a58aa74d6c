//! Localization hook and manifest reference substitution.
//!
//! Manifest string leaves of the form `l10n.<key>` are references into a
//! host-supplied translation map. Substitution runs once over the whole
//! document when the manifest is loaded.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;

/// Mapping from short localization keys to translated strings.
pub type LocalizationMap = BTreeMap<String, String>;

static L10N_REFERENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^l10n\.([A-Za-z0-9_]+)$").expect("valid l10n reference regex"));

/// Supplies translated strings for `l10n.<key>` manifest leaves.
///
/// The default implementation returns an empty map; hosts override it to
/// plug in their translation backend.
pub trait LocalizationProvider {
    fn localization(&self) -> LocalizationMap {
        LocalizationMap::new()
    }
}

/// Provider with no translations; every `l10n.<key>` leaf stays as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyLocalization;

impl LocalizationProvider for EmptyLocalization {}

/// Replaces `l10n.<key>` string leaves with translations from `map`.
///
/// Keys absent from `map` keep the original reference string.
pub fn localize_tree(node: &mut Value, map: &LocalizationMap) {
    match node {
        Value::String(text) => {
            if let Some(captures) = L10N_REFERENCE_RE.captures(text) {
                if let Some(translated) = map.get(&captures[1]) {
                    *text = translated.clone();
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                localize_tree(item, map);
            }
        }
        Value::Object(entries) => {
            for (_, value) in entries.iter_mut() {
                localize_tree(value, map);
            }
        }
        _ => {}
    }
}
