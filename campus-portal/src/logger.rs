use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "campus_core=info,campus_portal=info";

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set. Calling this twice is harmless: the second
/// call leaves the first subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
