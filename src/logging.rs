use tracing_subscriber::EnvFilter;

/// Initialize tracing output to stderr.
///
/// Default: debug for this crate, warn for everything else. Override with
/// `RUST_LOG`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cari_bot=debug,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .ok(); // If already initialized (e.g., in tests), don't crash.
}
