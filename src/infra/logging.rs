use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global `tracing` subscriber for a binary.
///
/// Levels come from `RUST_LOG`; without it everything logs at `info` and this
/// crate at `debug`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,player_registry=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();
}
