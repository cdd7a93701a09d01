use anyhow::Result;
use clap::Parser;
use lecture_console::{
    Config, ConsoleListingView, ConsoleNotifier, HttpBackendClient, SessionController,
    TranscriptionPoller,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "lecture-console", about = "Console client for the lecture recording backend")]
struct Cli {
    /// Config file path, without extension
    #[arg(long, default_value = "config/lecture-console")]
    config: String,

    /// Override the backend base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Override the poll interval in seconds
    #[arg(long)]
    interval_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut cfg = Config::load(&cli.config)?;
    if let Some(url) = cli.base_url {
        cfg.backend.base_url = url;
    }
    if let Some(secs) = cli.interval_secs {
        cfg.poll.interval_secs = secs;
    }

    info!("Lecture Console v0.1.0");
    info!("Backend: {}", cfg.backend.base_url);
    info!("Polling transcriptions every {}s", cfg.poll.interval_secs);

    let backend = Arc::new(HttpBackendClient::new(&cfg.backend.base_url)?);
    let controller = Arc::new(SessionController::new(
        backend,
        Arc::new(ConsoleNotifier),
        Arc::new(ConsoleListingView),
    ));

    let poller = TranscriptionPoller::new(
        Arc::clone(&controller),
        Duration::from_secs(cfg.poll.interval_secs),
    );
    let poller_handle = poller.spawn();

    lecture_console::shell::run(Arc::clone(&controller)).await?;

    poller_handle.shutdown().await?;

    Ok(())
}
