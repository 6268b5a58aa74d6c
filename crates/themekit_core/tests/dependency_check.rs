use serde_json::json;
use themekit_core::{
    ComponentRegistry, DependencyDeclaration, DependencyValidator, ErrorCollector, VersionPolicy,
};

#[test]
fn example_scenario_reports_one_outdated_module() {
    let subtree = json!({ "Core": { r"Acme\Widget": "2.0" } });
    let declaration = DependencyDeclaration::from_manifest_value(&subtree);

    let mut registry = ComponentRegistry::new();
    registry
        .register(r"Acme\Widget", "1.5")
        .expect("component should register");

    let mut errors = ErrorCollector::new();
    DependencyValidator::new().validate(&declaration, &registry, &mut errors);

    assert!(errors.has_errors());
    assert_eq!(errors.len(), 1);
    let message = &errors.messages()[0];
    assert!(message.contains("Core"));
    assert!(message.contains(r"Acme\Widget"));
    assert!(message.contains("2.0"));
}

#[test]
fn fully_satisfied_declaration_leaves_sink_clean() {
    let subtree = json!({
        "Core": { r"Acme\Widget": "1.0", r"Acme\Toolkit": "*" },
        "Media": { r"Acme\Gallery": "0.9" }
    });
    let declaration = DependencyDeclaration::from_manifest_value(&subtree);

    let mut registry = ComponentRegistry::new();
    registry
        .register(r"Acme\Widget", "1.0")
        .expect("component should register");
    registry
        .register_unversioned(r"Acme\Toolkit")
        .expect("component should register");
    registry
        .register(r"Acme\Gallery", "1.2")
        .expect("component should register");

    let mut errors = ErrorCollector::new();
    DependencyValidator::new().validate(&declaration, &registry, &mut errors);
    assert!(!errors.has_errors());
}

#[test]
fn one_missing_and_one_outdated_yield_exactly_two_messages() {
    let subtree = json!({
        "Core": { r"Acme\Widget": "2.0", r"Acme\Toolkit": "1.0" },
        "Media": { r"Acme\Gallery": "1.0" }
    });
    let declaration = DependencyDeclaration::from_manifest_value(&subtree);

    let mut registry = ComponentRegistry::new();
    registry
        .register(r"Acme\Widget", "1.5")
        .expect("component should register");
    registry
        .register(r"Acme\Toolkit", "1.0")
        .expect("component should register");

    let mut errors = ErrorCollector::new();
    DependencyValidator::new().validate(&declaration, &registry, &mut errors);

    assert_eq!(errors.len(), 2, "validation must not stop at first failure");
    let joined = errors.messages().join("\n");
    assert!(joined.contains("must have version 2.0 or higher"));
    assert!(joined.contains(r"Acme\Gallery does not exist"));
}

#[test]
fn wildcard_accepts_any_declared_version() {
    let subtree = json!({ "Core": { r"Acme\Widget": "*", r"Acme\Toolkit": "*" } });
    let declaration = DependencyDeclaration::from_manifest_value(&subtree);

    let mut registry = ComponentRegistry::new();
    registry
        .register(r"Acme\Widget", "0.0.1")
        .expect("component should register");
    registry
        .register_unversioned(r"Acme\Toolkit")
        .expect("component should register");

    let mut errors = ErrorCollector::new();
    DependencyValidator::new().validate(&declaration, &registry, &mut errors);
    assert!(!errors.has_errors());
}

#[test]
fn policies_disagree_on_multi_digit_segments() {
    let subtree = json!({ "Core": { r"Acme\Widget": "2.9" } });
    let declaration = DependencyDeclaration::from_manifest_value(&subtree);

    let mut registry = ComponentRegistry::new();
    registry
        .register(r"Acme\Widget", "2.10")
        .expect("component should register");

    let mut loose_errors = ErrorCollector::new();
    DependencyValidator::with_policy(VersionPolicy::Loose).validate(
        &declaration,
        &registry,
        &mut loose_errors,
    );
    assert_eq!(loose_errors.len(), 1, "loose order reads 2.10 as 2.1");

    let mut numeric_errors = ErrorCollector::new();
    DependencyValidator::with_policy(VersionPolicy::Numeric).validate(
        &declaration,
        &registry,
        &mut numeric_errors,
    );
    assert!(!numeric_errors.has_errors(), "numeric order accepts 2.10");
}
