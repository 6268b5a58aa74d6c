//! Bootstrap kernel for CMS theme packages.
//! This crate is the single source of truth for bootstrap gating invariants.

pub mod bootstrap;
pub mod deps;
pub mod errors;
pub mod logging;
pub mod registry;
pub mod schema;
pub mod settings;

pub use bootstrap::context::{
    BootstrapArgs, BootstrapContext, DEPENDENCY_MODULES_KEY, LICENSE_CLIENT_KEY,
    LICENSE_PRODUCT_KEY,
};
pub use bootstrap::license::{
    LicenseArgs, LicenseClient, LicenseClientFactory, LicenseManager, LicenseManagerFactory,
};
pub use deps::declaration::{DependencyDeclaration, ANY_VERSION};
pub use deps::validator::DependencyValidator;
pub use deps::version::VersionPolicy;
pub use errors::ErrorCollector;
pub use logging::{default_log_level, init_logging, logging_status};
pub use registry::component::{ComponentRegistry, ComponentRegistryError};
pub use schema::l10n::{EmptyLocalization, LocalizationMap, LocalizationProvider};
pub use schema::store::SchemaStore;
pub use settings::Settings;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
