//! File logging.
//!
//! The terminal is in raw mode on the alternate screen, so log lines would
//! corrupt the display. Logs go to a file instead, without ANSI colors.

use std::{fs::OpenOptions, io, path::Path, sync::Mutex};

use tracing_subscriber::{EnvFilter, fmt};

/// Build a subscriber that appends to `path`.
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn subscriber(
    path: &Path,
    default_level: &str,
) -> io::Result<impl tracing::Subscriber + Send + Sync + 'static> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    Ok(fmt().with_env_filter(filter).with_writer(Mutex::new(file)).with_ansi(false).finish())
}

/// Install the file subscriber as the global default.
pub fn init(path: &Path, default_level: &str) -> Result<(), Box<dyn std::error::Error>> {
    tracing::subscriber::set_global_default(subscriber(path, default_level)?)?;
    Ok(())
}
