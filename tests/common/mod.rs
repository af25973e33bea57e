//! Shared helpers for integration tests

use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once per test binary.
///
/// Set `HEAP_LOG=trace` to see link and meld events.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("HEAP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
