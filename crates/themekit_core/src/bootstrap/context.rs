//! Bootstrap context and lifecycle.
//!
//! # Responsibility
//! - Hold the theme descriptor, error sink, settings and schema store for
//!   one bootstrap.
//! - Run the init sequence in order: dependency check, license wiring.
//!
//! # Invariants
//! - `init` runs to completion; expected faults become collected
//!   diagnostics, never early returns or panics.
//! - License collaborators are only constructed while the sink is clean.

use crate::bootstrap::license::{
    LicenseArgs, LicenseClient, LicenseClientFactory, LicenseManager, LicenseManagerFactory,
};
use crate::deps::declaration::DependencyDeclaration;
use crate::deps::validator::DependencyValidator;
use crate::errors::ErrorCollector;
use crate::registry::ComponentRegistry;
use crate::schema::store::SchemaStore;
use crate::settings::Settings;
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Manifest subtree declaring module dependencies.
pub const DEPENDENCY_MODULES_KEY: &str = "extra.schemas.dependencies.modules";
/// Manifest subtree configuring the license client.
pub const LICENSE_CLIENT_KEY: &str = "extra.schemas.licenses.client";
/// Manifest subtree describing the licensed product.
pub const LICENSE_PRODUCT_KEY: &str = "extra.schemas.licenses.product";

/// Theme descriptor handed in by the host at bootstrap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapArgs {
    /// Theme display name.
    pub name: String,
    /// Theme version string.
    pub version: String,
    /// Parent template name when this theme is a child.
    pub template: String,
    /// Localization text domain.
    pub domain: String,
    /// Whether this theme runs as a child of `template`.
    pub is_child: bool,
}

impl BootstrapArgs {
    /// Returns the descriptor with whitespace-padded fields trimmed.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.version = self.version.trim().to_string();
        self.template = self.template.trim().to_string();
        self.domain = self.domain.trim().to_string();
        self
    }
}

/// Long-lived bootstrap context owning the error sink and settings.
///
/// Constructed once at process start and passed by reference to whatever
/// needs it. Downstream wiring checks `has_errors()` before constructing
/// dependent subsystems.
pub struct BootstrapContext {
    args: BootstrapArgs,
    schema: SchemaStore,
    settings: Settings,
    errors: ErrorCollector,
    license_client: Option<Box<dyn LicenseClient>>,
    license_manager: Option<Box<dyn LicenseManager>>,
}

impl BootstrapContext {
    /// Creates a context without running any bootstrap step.
    pub fn new(args: BootstrapArgs, schema: SchemaStore) -> Self {
        Self {
            args: args.normalized(),
            schema,
            settings: Settings::new(),
            errors: ErrorCollector::new(),
            license_client: None,
            license_manager: None,
        }
    }

    /// Creates a context and runs the bootstrap sequence.
    ///
    /// Order matches the dependency gating contract: the dependency check
    /// runs first, and license wiring only proceeds on a clean sink.
    pub fn init(
        args: BootstrapArgs,
        schema: SchemaStore,
        registry: &ComponentRegistry,
        validator: &DependencyValidator,
        license_client_factory: Option<&dyn LicenseClientFactory>,
    ) -> Self {
        let mut context = Self::new(args, schema);
        info!(
            "event=bootstrap_init module=bootstrap status=start name={} version={}",
            context.args.name, context.args.version
        );
        context.check_dependencies(registry, validator);
        context.define_license_client(license_client_factory);
        info!(
            "event=bootstrap_init module=bootstrap status={} errors={}",
            if context.has_errors() { "failed" } else { "ok" },
            context.errors.len()
        );
        context
    }

    /// Validates the manifest's declared module dependencies.
    ///
    /// A manifest without a dependency subtree is not a fault; the check
    /// is simply skipped.
    pub fn check_dependencies(
        &mut self,
        registry: &ComponentRegistry,
        validator: &DependencyValidator,
    ) {
        let declaration = match self.schema.get(DEPENDENCY_MODULES_KEY) {
            Some(subtree) => DependencyDeclaration::from_manifest_value(subtree),
            None => return,
        };
        if declaration.is_empty() {
            return;
        }
        validator.validate(&declaration, registry, &mut self.errors);
    }

    /// Wires the license client when the manifest asks for one.
    ///
    /// Skips silently when errors are already collected or the client
    /// schema is absent. A missing factory and an invalid schema become
    /// collected diagnostics. Returns whether a client was constructed.
    pub fn define_license_client(
        &mut self,
        factory: Option<&dyn LicenseClientFactory>,
    ) -> bool {
        if self.errors.has_errors() {
            return false;
        }
        let Some(schema) = self.license_schema(LICENSE_CLIENT_KEY) else {
            return false;
        };
        let Some(factory) = factory else {
            self.errors.add(
                "License client component is not available. Be sure all required \
                 plugins and composer modules are installed and activated.",
            );
            return false;
        };
        let args = LicenseArgs::new(self.args.clone(), schema);
        if args.schema_str("screen").is_none() {
            // Collected but not blocking: the client is still constructed.
            self.errors
                .add("License client can not be activated due to an invalid licenses schema.");
        }
        match factory.build(&args) {
            Ok(client) => {
                info!(
                    "event=license_client module=bootstrap status=ok id={}",
                    client.client_id()
                );
                self.license_client = Some(client);
                true
            }
            Err(message) => {
                self.errors.add(message);
                false
            }
        }
    }

    /// Wires the license manager when the manifest describes a product.
    ///
    /// Mirrors the client wiring: silent skip on prior errors or absent
    /// schema; missing `product_id`/`referrer` and a missing factory are
    /// collected diagnostics. Returns whether a manager was constructed.
    pub fn define_license_manager(
        &mut self,
        factory: Option<&dyn LicenseManagerFactory>,
    ) -> bool {
        if self.errors.has_errors() {
            return false;
        }
        let Some(schema) = self.license_schema(LICENSE_PRODUCT_KEY) else {
            return false;
        };
        let args = LicenseArgs::new(self.args.clone(), schema);
        if args.schema_str("product_id").is_none() || args.schema_str("referrer").is_none() {
            self.errors.add(
                "Product requires a license, but the product ID and (or) referrer \
                 is undefined. Be sure the license schema has all required data.",
            );
        }
        let Some(factory) = factory else {
            self.errors.add(
                "License manager component is not available. Be sure all required \
                 plugins are installed and activated.",
            );
            return false;
        };
        match factory.build(&args) {
            Ok(manager) => {
                info!(
                    "event=license_manager module=bootstrap status=ok id={}",
                    manager.manager_id()
                );
                self.license_manager = Some(manager);
                true
            }
            Err(message) => {
                self.errors.add(message);
                false
            }
        }
    }

    /// Releases license collaborators; the context itself stays usable
    /// for error inspection.
    pub fn shutdown(&mut self) {
        self.license_client = None;
        self.license_manager = None;
        info!("event=bootstrap_shutdown module=bootstrap status=ok");
    }

    /// Returns whether any bootstrap step collected a diagnostic.
    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    pub fn errors(&self) -> &ErrorCollector {
        &self.errors
    }

    /// Appends one diagnostic to the bootstrap sink.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.add(message);
    }

    pub fn args(&self) -> &BootstrapArgs {
        &self.args
    }

    pub fn schema(&self) -> &SchemaStore {
        &self.schema
    }

    /// Returns a dynamic setting value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    /// Stores a dynamic setting value, returning the previous one if any.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.settings.set(key, value)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn license_client(&self) -> Option<&dyn LicenseClient> {
        self.license_client.as_deref()
    }

    pub fn license_manager(&self) -> Option<&dyn LicenseManager> {
        self.license_manager.as_deref()
    }

    /// Returns a present license schema subtree.
    ///
    /// An empty object or empty array counts as absent, matching the
    /// manifest convention that an empty declaration disables the feature.
    fn license_schema(&self, key: &str) -> Option<Value> {
        let subtree = self.schema.get(key)?;
        let present = match subtree {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Object(entries) => !entries.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::String(text) => !text.is_empty(),
            Value::Number(_) => true,
        };
        present.then(|| subtree.clone())
    }
}
