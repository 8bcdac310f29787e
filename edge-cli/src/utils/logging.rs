use rst_common::with_tracing::tracing_subscriber::{
    self, layer::SubscriberExt, util::SubscriberInitExt,
};

pub const DEFAULT_LOG_LEVEL: &str = "debug";

/// `default_filter` builds the filter used when `RUST_LOG` is not set, the given level applies
/// to this binary and to the edge crates it drives
pub fn default_filter(log_level: &str) -> String {
    format!(
        "{}={},verity_edge_core={},verity_edge_http={}",
        env!("CARGO_CRATE_NAME"),
        log_level,
        log_level,
        log_level
    )
}

/// `setup` installs the global subscriber, `RUST_LOG` overrides the given default level
pub fn setup(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}
