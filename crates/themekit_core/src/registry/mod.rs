//! Host component registries.
//!
//! # Responsibility
//! - Track which components the host has loaded, with declared versions.
//! - Answer existence/version probes during dependency validation.

pub mod component;

pub use component::{ComponentRegistry, ComponentRegistryError};
