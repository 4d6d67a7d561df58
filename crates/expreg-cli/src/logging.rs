use tracing_subscriber::EnvFilter;

/// Sends tracing output to stderr so stdout only carries results.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Respect RUST_LOG, default to "warn"
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt().with_env_filter(env_filter).with_writer(std::io::stderr).try_init()
}
