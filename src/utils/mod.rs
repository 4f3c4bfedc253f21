//! Utility helpers for the audit pipeline.

pub mod crop;

pub use crop::crop_with_padding;

use tracing_subscriber::EnvFilter;

/// Initializes tracing output for binaries and tests.
///
/// Honors `RUST_LOG` when set, otherwise falls back to the given default
/// directive. Safe to call more than once; later calls are no-ops.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
