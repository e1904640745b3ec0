// Map Fixture Mock - canned network responses for renderer tests
// Loads fixture buffers once and maps request URLs onto them

// Module declarations
pub mod config;
pub mod error;
pub mod fixtures;
pub mod resolver;
pub mod shared;

// Re-exports for convenience
pub use config::MockConfig;
pub use error::{ErrorCode, FixtureError};
pub use fixtures::{FixtureKey, FixtureSet};
pub use resolver::{classify, FixtureResolver, Request, Resolution};

/// Install a stderr `tracing` subscriber at `level`.
///
/// Safe to call more than once; only the first call installs a subscriber.
/// `log` records from the config loader are bridged into the same output.
pub fn init_logging(level: tracing::Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}
