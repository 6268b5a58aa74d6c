//! Declared module dependencies and their validation.
//!
//! # Responsibility
//! - Model the manifest's module → component → minimum-version subtree.
//! - Check every requirement against the host component registry.
//!
//! # Invariants
//! - Validation accumulates every violation in one pass; no fail-fast.
//! - Version ordering is an explicit policy choice, never a silent one.

pub mod declaration;
pub mod validator;
pub mod version;

pub use declaration::{DependencyDeclaration, ANY_VERSION};
pub use validator::DependencyValidator;
pub use version::VersionPolicy;
