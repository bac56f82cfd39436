//! Subscriber construction and global installation.

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::Verbosity;

/// Filter honouring `RUST_LOG`, falling back to the verbosity's directive.
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directive()))
}

/// Registry with `filter` and a compact formatting layer writing to `writer`.
pub fn build_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_target(true)
            .without_time(),
    )
}

/// Installs the global subscriber, writing to standard error.
///
/// Does nothing when a global subscriber is already installed.
pub fn init_tracing(verbosity: Verbosity) {
    let _ = try_init_tracing(verbosity);
}

/// Installs the global subscriber, writing to standard error.
pub fn try_init_tracing(verbosity: Verbosity) -> Result<(), TryInitError> {
    build_subscriber(env_filter(verbosity), std::io::stderr).try_init()
}
