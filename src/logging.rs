//! Subscriber setup for the binaries
//!
//! `RUST_LOG` wins when set; otherwise the binary's default level applies.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, falling back to `default_level`
pub fn env_filter(default_level: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy()
}

/// Filter from explicit directives, falling back to `default_level`
pub fn parse_filter(directives: &str, default_level: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse_lossy(directives)
}

/// Install a stderr fmt subscriber
pub fn init(default_level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .init();
}
