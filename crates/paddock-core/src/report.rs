use crate::error::AppError;
use crate::models::Event;

/// Totals of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Series processed.
    pub series: usize,
    /// Events fetched and parsed.
    pub scraped: usize,
    /// Listed events skipped because an earlier series already had them.
    pub skipped: usize,
}

/// Events emitted by the series runner for monitoring/logging.
#[derive(Debug, Clone)]
pub enum RunEvent<'a> {
    SeriesStarted {
        series: &'a str,
        url: &'a str,
    },
    EventsListed {
        series: &'a str,
        count: usize,
    },
    EventScraped {
        series: &'a str,
        event: &'a Event,
    },
    EventSkipped {
        series: &'a str,
        event_id: u32,
    },
    SummaryWritten {
        series: &'a str,
        events: usize,
    },
    Finished {
        summary: &'a RunSummary,
    },
    Aborted {
        series: &'a str,
        error: &'a AppError,
    },
}

/// Trait for receiving runner events (decoupled logging).
pub trait RunReporter: Send + Sync {
    fn report(&self, event: RunEvent<'_>) {
        let _ = event;
    }
}

/// Reporter that uses the `tracing` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRunReporter;

impl RunReporter for TracingRunReporter {
    fn report(&self, event: RunEvent<'_>) {
        match event {
            RunEvent::SeriesStarted { series, url } => {
                tracing::info!(%series, %url, "Scraping series");
            }
            RunEvent::EventsListed { series, count } => {
                tracing::info!(%series, count, "Found events");
            }
            RunEvent::EventScraped { series, event } => {
                tracing::info!(
                    "{}/{}: {} ({}, {} teams)",
                    series,
                    event.id,
                    event.name,
                    event.kind,
                    event.team_count()
                );
            }
            RunEvent::EventSkipped { series, event_id } => {
                tracing::info!(
                    "Skipping {}/{} (already scraped, probably a mixed event)",
                    series,
                    event_id
                );
            }
            RunEvent::SummaryWritten { series, events } => {
                tracing::info!(%series, events, "Wrote series summary");
            }
            RunEvent::Finished { summary } => {
                tracing::info!(
                    series = summary.series,
                    scraped = summary.scraped,
                    skipped = summary.skipped,
                    "Run finished"
                );
            }
            RunEvent::Aborted { series, error } => {
                tracing::error!(%series, category = error.category(), %error, "Run aborted");
            }
        }
    }
}
