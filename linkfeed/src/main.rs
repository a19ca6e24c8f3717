//! linkfeed terminal front end
//!
//! Reads commands from stdin, renders cards to stdout. Logs go to stderr so
//! they never interleave with the feed.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linkfeed::adapters::IframelyClient;
use linkfeed::app::Session;
use linkfeed::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,linkfeed=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting linkfeed...");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    let provider =
        Arc::new(IframelyClient::new(&config).context("Failed to build HTTP client")?);

    let session = Session::new(provider);
    let feed = session
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .context("Terminal session failed")?;

    tracing::info!(posts = feed.len(), "Session ended");
    Ok(())
}
