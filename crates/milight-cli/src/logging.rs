//! Log setup for the command-line tool

use anyhow::{anyhow, Result};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Install a stderr subscriber.
///
/// `RUST_LOG` takes precedence over the level picked from `-v` flags.
pub fn init(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
