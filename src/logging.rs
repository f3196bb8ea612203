use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr. Stdout carries the status lines.
///
/// Honors `RUST_LOG`; defaults to `warn,rawfetch=info`.
pub fn init_logging() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,rawfetch=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}
