//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::{Builder, Env, Target};

/// Setup logging for the checker.
///
/// Honors `RUST_LOG`, defaults to `error`, and always writes to stderr.
pub fn setup_logging() {
    Builder::from_env(Env::default().default_filter_or("error"))
        .target(Target::Stderr)
        .init();
}
