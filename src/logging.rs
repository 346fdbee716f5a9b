//! Tracing setup for the binary

use tracing::trace;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "hangman=warn";

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`
///
/// Falls back to warnings from this crate only when `RUST_LOG` is unset or
/// invalid. Calling this twice is harmless; the second call is ignored.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if installed.is_ok() {
        trace!("finished");
    }
}
