use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use paddock_client::{HtmlResultsParser, ReqwestFetcher};
use paddock_core::{PacedFetcher, RunConfig, SeriesRunner};
use paddock_store::CsvStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("paddock=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::from_env().context("Invalid configuration")?;
    tracing::info!(
        pause_ms = %config.pause.as_millis(),
        timeout_secs = config.timeout.as_secs(),
        summary_scope = %config.summary_scope,
        "Starting run"
    );

    let fetcher = ReqwestFetcher::with_timeout(config.timeout)
        .context("Failed to create HTTP client")?;
    let fetcher = PacedFetcher::new(fetcher, config.pause);
    let store = CsvStore::open(&config.output_dir).with_context(|| {
        format!(
            "Failed to prepare output directory {}",
            config.output_dir.display()
        )
    })?;

    let mut runner = SeriesRunner::new(fetcher, HtmlResultsParser::new(), store)
        .with_summary_scope(config.summary_scope);
    runner
        .run(&config.series)
        .await
        .context("Scraping failed")?;

    Ok(())
}
