//! Declared module dependency requirements.

use serde_json::Value;
use std::collections::BTreeMap;

/// Minimum-version wildcard accepting any declared version.
pub const ANY_VERSION: &str = "*";

/// Declared requirements: module name → component id → minimum version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyDeclaration {
    modules: BTreeMap<String, BTreeMap<String, String>>,
}

impl DependencyDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a declaration from the manifest's dependency subtree.
    ///
    /// Tolerant by contract: module entries that are not mappings and
    /// minimum versions that are not scalars are skipped, not rejected.
    pub fn from_manifest_value(value: &Value) -> Self {
        let mut declaration = Self::new();
        let Some(modules) = value.as_object() else {
            return declaration;
        };
        for (module_name, components) in modules {
            let Some(components) = components.as_object() else {
                continue;
            };
            for (component_id, minimum) in components {
                let Some(minimum) = scalar_version(minimum) else {
                    continue;
                };
                declaration.require(module_name, component_id, &minimum);
            }
        }
        declaration
    }

    /// Adds one requirement; a later call overwrites an earlier one for
    /// the same module/component pair.
    pub fn require(&mut self, module: &str, component_id: &str, minimum_version: &str) {
        self.modules
            .entry(module.to_string())
            .or_default()
            .insert(component_id.to_string(), minimum_version.to_string());
    }

    /// Iterates `(module, component, minimum version)` requirements in
    /// deterministic sorted order.
    pub fn requirements(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.modules.iter().flat_map(|(module, components)| {
            components.iter().map(move |(component, minimum)| {
                (module.as_str(), component.as_str(), minimum.as_str())
            })
        })
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.values().all(BTreeMap::is_empty)
    }
}

fn scalar_version(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::DependencyDeclaration;
    use serde_json::json;

    #[test]
    fn parses_manifest_subtree() {
        let subtree = json!({
            "Core": { r"Acme\Widget": "2.0", r"Acme\Toolkit": "*" },
            "Media": { r"Acme\Gallery": 3 }
        });
        let declaration = DependencyDeclaration::from_manifest_value(&subtree);

        assert_eq!(declaration.module_count(), 2);
        let requirements: Vec<_> = declaration.requirements().collect();
        assert_eq!(
            requirements,
            [
                ("Core", r"Acme\Toolkit", "*"),
                ("Core", r"Acme\Widget", "2.0"),
                ("Media", r"Acme\Gallery", "3"),
            ]
        );
    }

    #[test]
    fn skips_non_mapping_modules_and_non_scalar_versions() {
        let subtree = json!({
            "Broken": "not a mapping",
            "Half": { r"Acme\Widget": ["2.0"], r"Acme\Toolkit": "1.0" }
        });
        let declaration = DependencyDeclaration::from_manifest_value(&subtree);
        let requirements: Vec<_> = declaration.requirements().collect();
        assert_eq!(requirements, [("Half", r"Acme\Toolkit", "1.0")]);
    }

    #[test]
    fn non_object_subtree_is_empty() {
        let declaration = DependencyDeclaration::from_manifest_value(&json!("nope"));
        assert!(declaration.is_empty());
    }

    #[test]
    fn require_overwrites_same_pair() {
        let mut declaration = DependencyDeclaration::new();
        declaration.require("Core", r"Acme\Widget", "1.0");
        declaration.require("Core", r"Acme\Widget", "2.0");
        let requirements: Vec<_> = declaration.requirements().collect();
        assert_eq!(requirements, [("Core", r"Acme\Widget", "2.0")]);
    }
}
