use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber. Filters come from `RUST_LOG`, defaulting to
/// `warn`. Output goes to stderr so the menu on stdout stays clean.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Logging setup complete.");
}
