//! Vouch terminal client entry point.

use std::path::PathBuf;

use clap::Parser;
use vouch_client::{ClientConfig, DEFAULT_BASE_URL, HttpBackend};
use vouch_core::SessionStore;
use vouch_tui::{Runtime, TerminalDriver, logging};

/// Vouch terminal client
#[derive(Parser, Debug)]
#[command(name = "vouch")]
#[command(about = "Sign in to the Vouch profile service and edit your profile")]
#[command(version)]
struct Args {
    /// Base URL of the profile service
    #[arg(long, env = "VOUCH_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Write logs to this file
    ///
    /// The terminal owns stdout, so nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        logging::init(path, &args.log_level)?;
    }

    let config = ClientConfig::new(&args.api_url)?;
    let backend = HttpBackend::new(config.clone())?;
    tracing::info!(api_url = config.base_url(), "starting");

    let driver = TerminalDriver::new(config)?;
    Runtime::new(driver, backend, SessionStore::new()).run().await?;

    tracing::info!("exited");
    Ok(())
}
