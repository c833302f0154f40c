//! Agora TUI entry point.

use std::{path::PathBuf, time::Duration};

use agora_client::{ClientConfig, FileSessionStore, ForumApi, HttpApi};
use agora_core::Locale;
use agora_tui::{Runtime, TerminalDriver, demo};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Agora classroom forum client
#[derive(Parser, Debug)]
#[command(name = "agora")]
#[command(about = "Terminal client for the Agora classroom forum")]
#[command(version)]
struct Args {
    /// Forum API base URL
    ///
    /// If not provided, runs against an in-process demo backend.
    #[arg(short, long, env = "AGORA_SERVER")]
    server: Option<String>,

    /// Directory for the saved session and the log file
    #[arg(long, env = "AGORA_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Interface language (pt-br, en-us)
    #[arg(long, env = "AGORA_LOCALE", default_value = "pt-br")]
    locale: Locale,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let data_dir = args
        .data_dir
        .or_else(|| dirs::data_dir().map(|dir| dir.join("agora")))
        .unwrap_or_else(|| PathBuf::from(".agora"));
    std::fs::create_dir_all(&data_dir)?;

    // The terminal owns stdout, so logs go to a file
    let appender = tracing_appender::rolling::never(&data_dir, "agora.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();

    let store = FileSessionStore::new(&data_dir);
    tracing::info!(data_dir = %data_dir.display(), locale = %args.locale, "starting");

    match args.server {
        Some(base_url) => {
            tracing::info!(%base_url, "using server");
            let config = ClientConfig { base_url, timeout: Duration::from_secs(args.timeout_secs) };
            run(HttpApi::new(&config)?, store, args.locale).await
        },
        None => {
            tracing::info!("no server given, using demo backend");
            run(demo::seeded_api(), store, args.locale).await
        },
    }
}

async fn run<A: ForumApi>(
    api: A,
    store: FileSessionStore,
    locale: Locale,
) -> Result<(), Box<dyn std::error::Error>> {
    let driver = TerminalDriver::new()?;
    Runtime::new(driver, api, store, locale).run().await?;
    Ok(())
}
