//! Helpers shared by the integration tests.

use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by domain-idna and the test suite.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To enable trace level logging of the normalizer:
///   RUST_LOG=domain_idna=TRACE
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}

/// Turns a slice of string slices into owned labels.
pub fn labels(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| String::from(*label)).collect()
}
