// Logger setup for binaries built on this crate

use env_logger::{Builder, Env};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Logger environment: `RUST_LOG` when set, otherwise [`DEFAULT_LOG_FILTER`]
pub fn env() -> Env<'static> {
    Env::default().default_filter_or(DEFAULT_LOG_FILTER)
}

/// Build a logger from `env` without installing it
pub fn builder(env: Env<'_>) -> Builder {
    Builder::from_env(env)
}

/// Install the global logger
pub fn init() {
    builder(env()).init();
}
