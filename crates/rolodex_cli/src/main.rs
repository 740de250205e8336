//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `rolodex_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // A tiny probe that exercises core wiring independently from the
    // Flutter/FFI runtime setup.
    println!("rolodex_core ping={}", rolodex_core::ping());
    println!("rolodex_core version={}", rolodex_core::core_version());
}
