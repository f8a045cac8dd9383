use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the given verbosity
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "new_release_version=debug"
    } else {
        "new_release_version=warn"
    }
}

/// Install the global subscriber. Output goes to stderr so that stdout
/// carries only the resolved version. `RUST_LOG` overrides the default filter.
pub fn init_logger(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .try_init();
}
