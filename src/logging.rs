use tracing_subscriber::EnvFilter;

/// Initialise logging for the plugin. The default level is `info`;
/// the `debug_logging` setting raises it to `debug`.
/// `RUST_LOG` may override the level, but only when debug logging is
/// enabled, so a stray environment variable cannot turn on verbose
/// output for every user.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    // The host application may already own a global subscriber; if so,
    // leave it in charge.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
