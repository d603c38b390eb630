use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,dragview_core=debug,dragview_input=debug,dragview_ui=debug";

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over the built-in filter. Calling this twice is harmless;
/// the second call leaves the first subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
