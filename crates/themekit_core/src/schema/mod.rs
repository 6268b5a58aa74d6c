//! Package manifest access.
//!
//! # Responsibility
//! - Load the package manifest document at most once per store.
//! - Resolve dot-notated queries and localization references.
//!
//! # Invariants
//! - A missing or unparseable manifest is a soft condition, never a fault
//!   that escapes to the caller.
//! - Localization substitution happens at load time, not at query time.

pub mod l10n;
pub mod path;
pub mod store;
