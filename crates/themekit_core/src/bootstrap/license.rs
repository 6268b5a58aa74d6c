//! License collaborator contracts.
//!
//! The license client and manager are external subsystems reached through
//! a constructor contract; this crate never looks inside them. Hosts hand
//! in factory implementations, and the bootstrap context decides whether
//! construction may proceed.

use crate::bootstrap::context::BootstrapArgs;
use serde_json::Value;

/// Opaque handle to a constructed license client.
pub trait LicenseClient {
    /// Stable identifier used in diagnostics.
    fn client_id(&self) -> &str;
}

/// Builds license clients from merged bootstrap and schema arguments.
///
/// A build failure is an expected condition: the message is appended to
/// the bootstrap error sink, not propagated.
pub trait LicenseClientFactory {
    fn build(&self, args: &LicenseArgs) -> Result<Box<dyn LicenseClient>, String>;
}

/// Opaque handle to a constructed license manager.
pub trait LicenseManager {
    /// Stable identifier used in diagnostics.
    fn manager_id(&self) -> &str;
}

/// Builds license managers from merged bootstrap and schema arguments.
pub trait LicenseManagerFactory {
    fn build(&self, args: &LicenseArgs) -> Result<Box<dyn LicenseManager>, String>;
}

/// Constructor arguments for license collaborators.
///
/// Carries the theme descriptor plus the raw license schema subtree;
/// collaborators read what they need from `schema`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseArgs {
    pub bootstrap: BootstrapArgs,
    pub schema: Value,
}

impl LicenseArgs {
    pub fn new(bootstrap: BootstrapArgs, schema: Value) -> Self {
        Self { bootstrap, schema }
    }

    /// Returns a non-empty string field from the schema subtree.
    pub fn schema_str(&self, field: &str) -> Option<&str> {
        let text = self.schema.get(field)?.as_str()?.trim();
        (!text.is_empty()).then_some(text)
    }
}
