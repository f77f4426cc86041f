//! Logging setup shared by every front end of the inventory core.

/// Initialize process-wide logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    LogConfig::from_env().init();
}

/// Environment-driven settings.
pub mod config;

/// Subscriber installation.
pub mod logging;

pub use config::{LogConfig, LogFormat};
