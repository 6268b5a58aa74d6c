//! Theme bootstrap context and collaborator wiring.
//!
//! # Responsibility
//! - Own the per-bootstrap error sink, settings and schema store.
//! - Drive the init sequence: dependency validation, then license wiring.
//!
//! # Invariants
//! - One context per bootstrap, constructed explicitly and passed by
//!   reference; there is no process-global instance.
//! - License collaborators are only wired while the error sink is clean.

pub mod context;
pub mod license;

pub use context::{BootstrapArgs, BootstrapContext};
pub use license::{
    LicenseArgs, LicenseClient, LicenseClientFactory, LicenseManager, LicenseManagerFactory,
};
