//! Tracing setup for native test runs.

use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};

/// Compose a subscriber with the given default filter.
///
/// `RUST_LOG` takes precedence when set.
pub fn get_subscriber(env_filter: String) -> impl Subscriber + Send + Sync {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env_filter));
    let fmt_layer = tracing_subscriber::fmt::layer().with_test_writer();
    Registry::default().with(env_filter).with(fmt_layer)
}
