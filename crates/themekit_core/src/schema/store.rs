//! Lazy one-shot manifest store with dot-path queries.
//!
//! # Responsibility
//! - Read the package manifest file at most once per store instance.
//! - Answer dot-notated path queries against the cached document.
//!
//! # Invariants
//! - A missing or unparseable manifest caches an unavailable sentinel and
//!   every subsequent query returns `None`.
//! - Localization substitution runs once, on first successful load.

use crate::schema::l10n::{localize_tree, LocalizationMap, LocalizationProvider};
use crate::schema::path::resolve;
use log::{debug, warn};
use once_cell::unsync::OnceCell;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Cached view over one package manifest file.
///
/// Construction performs no I/O; the file is read on the first query and
/// the outcome, available or not, is cached for the store's lifetime.
pub struct SchemaStore {
    manifest_path: PathBuf,
    localization: LocalizationMap,
    document: OnceCell<Option<Value>>,
}

impl SchemaStore {
    /// Creates a store with no localization map.
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self::with_localization(manifest_path, LocalizationMap::new())
    }

    /// Creates a store with an explicit localization map.
    pub fn with_localization(
        manifest_path: impl Into<PathBuf>,
        localization: LocalizationMap,
    ) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            localization,
            document: OnceCell::new(),
        }
    }

    /// Creates a store drawing its localization map from `provider`.
    ///
    /// The provider hook is consulted once, here, not per query.
    pub fn with_provider(
        manifest_path: impl Into<PathBuf>,
        provider: &impl LocalizationProvider,
    ) -> Self {
        Self::with_localization(manifest_path, provider.localization())
    }

    /// Returns the manifest file path this store reads from.
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Returns whether the manifest loaded successfully.
    ///
    /// Triggers the one-shot load when it has not happened yet.
    pub fn is_available(&self) -> bool {
        self.document().is_some()
    }

    /// Resolves a dot-notated key against the cached manifest.
    ///
    /// Returns `None` when the manifest is unavailable or the path does
    /// not lead to a value. An empty key returns the whole document.
    pub fn get(&self, key: &str) -> Option<&Value> {
        resolve(self.document()?, key)
    }

    fn document(&self) -> Option<&Value> {
        self.document
            .get_or_init(|| load_manifest(&self.manifest_path, &self.localization))
            .as_ref()
    }
}

fn load_manifest(path: &Path, localization: &LocalizationMap) -> Option<Value> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            debug!(
                "event=manifest_load module=schema status=missing path={} error={err}",
                path.display()
            );
            return None;
        }
    };
    let mut document: Value = match serde_json::from_str(&raw) {
        Ok(document) => document,
        Err(err) => {
            warn!(
                "event=manifest_load module=schema status=parse_error path={} error={err}",
                path.display()
            );
            return None;
        }
    };
    localize_tree(&mut document, localization);
    debug!(
        "event=manifest_load module=schema status=ok path={}",
        path.display()
    );
    Some(document)
}
