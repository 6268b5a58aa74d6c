//! Dependency validation pass over declared module requirements.
//!
//! # Responsibility
//! - Check every declared component against the host component registry.
//! - Append one diagnostic per unmet requirement, never halting early.
//!
//! # Invariants
//! - A missing component yields exactly one message and skips the version
//!   probe for that component.
//! - Validation itself never fails; outcomes live in the error collector.

use crate::deps::declaration::{DependencyDeclaration, ANY_VERSION};
use crate::deps::version::VersionPolicy;
use crate::errors::ErrorCollector;
use crate::registry::ComponentRegistry;
use log::info;

/// Validates declared dependencies against loaded components.
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyValidator {
    policy: VersionPolicy,
}

impl DependencyValidator {
    /// Creates a validator with the default `Loose` version policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with an explicit version comparison policy.
    pub fn with_policy(policy: VersionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> VersionPolicy {
        self.policy
    }

    /// Runs one validation pass, appending a diagnostic per violation.
    ///
    /// Callers learn the outcome from the collector; the pass itself has
    /// no other result.
    pub fn validate(
        &self,
        declaration: &DependencyDeclaration,
        registry: &ComponentRegistry,
        errors: &mut ErrorCollector,
    ) {
        let mut violations = 0usize;
        for (module, component, minimum) in declaration.requirements() {
            if !registry.exists(component) {
                errors.add(format!(
                    "Module {module} is not installed or the version is old, \
                     component {component} does not exist."
                ));
                violations += 1;
                continue;
            }
            let minimum = minimum.trim();
            if minimum == ANY_VERSION {
                continue;
            }
            let satisfied = registry
                .version_of(component)
                .is_some_and(|declared| self.policy.satisfies(declared, minimum));
            if !satisfied {
                errors.add(format!(
                    "Module {module} should be updated to the latest version, \
                     component {component} must have version {minimum} or higher."
                ));
                violations += 1;
            }
        }
        info!(
            "event=dependency_check module=deps status={} violations={violations}",
            if violations == 0 { "ok" } else { "failed" }
        );
    }
}
