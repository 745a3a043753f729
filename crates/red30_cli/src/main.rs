//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `red30_core` linkage.
//! - Keep output deterministic and side-effect free for quick local sanity
//!   checks.

use red30_core::db::migrations::latest_version;

fn main() {
    println!("red30_core version={}", red30_core::core_version());
    println!("red30_core schema_version={}", latest_version());
}
