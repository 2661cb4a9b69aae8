//! Tracing subscriber setup.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`, at INFO by default.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init() -> bool {
    init_with_level(Level::INFO)
}

pub fn init_with_level(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
