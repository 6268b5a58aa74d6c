//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `themekit_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("themekit_core ping={}", themekit_core::ping());
    println!("themekit_core version={}", themekit_core::core_version());
}
