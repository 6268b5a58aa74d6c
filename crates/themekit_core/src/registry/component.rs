//! Component registry consumed by dependency validation.
//!
//! # Invariants
//! - Populated by the host before validation runs; validation reads only.
//! - Component ids are unique, non-empty and free of whitespace.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Component registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentRegistryError {
    InvalidComponentId(String),
    DuplicateComponentId(String),
}

impl Display for ComponentRegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidComponentId(value) => write!(f, "component id is invalid: {value}"),
            Self::DuplicateComponentId(value) => {
                write!(f, "component id already registered: {value}")
            }
        }
    }
}

impl Error for ComponentRegistryError {}

/// Host-populated registry of loaded components and their versions.
///
/// Component ids are fully-qualified identifiers such as `Acme\Widget`.
/// An entry may declare no version; dependency validation treats such an
/// entry as present but version-less.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: BTreeMap<String, Option<String>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one component with a declared version.
    pub fn register(
        &mut self,
        component_id: &str,
        version: &str,
    ) -> Result<(), ComponentRegistryError> {
        self.insert(component_id, Some(version.trim().to_string()))
    }

    /// Registers one component that declares no version.
    pub fn register_unversioned(
        &mut self,
        component_id: &str,
    ) -> Result<(), ComponentRegistryError> {
        self.insert(component_id, None)
    }

    fn insert(
        &mut self,
        component_id: &str,
        version: Option<String>,
    ) -> Result<(), ComponentRegistryError> {
        let component_id = component_id.trim();
        if !is_valid_component_id(component_id) {
            return Err(ComponentRegistryError::InvalidComponentId(
                component_id.to_string(),
            ));
        }
        if self.components.contains_key(component_id) {
            return Err(ComponentRegistryError::DuplicateComponentId(
                component_id.to_string(),
            ));
        }
        self.components.insert(component_id.to_string(), version);
        Ok(())
    }

    /// Returns whether `component_id` is registered.
    pub fn exists(&self, component_id: &str) -> bool {
        self.components.contains_key(component_id.trim())
    }

    /// Returns the declared version for `component_id`.
    ///
    /// `None` covers both an unknown component and a registered one that
    /// declares no version; callers distinguish via `exists`.
    pub fn version_of(&self, component_id: &str) -> Option<&str> {
        self.components
            .get(component_id.trim())
            .and_then(|version| version.as_deref())
    }

    /// Returns registered ids in sorted order.
    pub fn component_ids(&self) -> Vec<&str> {
        self.components.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

fn is_valid_component_id(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| !c.is_whitespace() && !c.is_control())
}
