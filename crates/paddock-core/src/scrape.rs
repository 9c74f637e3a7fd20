use crate::config::SummaryScope;
use crate::error::AppError;
use crate::models::Series;
use crate::registry::EventRegistry;
use crate::report::{RunEvent, RunReporter, RunSummary, TracingRunReporter};
use crate::traits::{Fetcher, ResultStore, ResultsParser};

/// Orchestrates a run: list events → fetch → parse → save, series by series.
///
/// Generic over all external dependencies via traits, enabling dependency
/// injection and testability without real HTTP or file output.
pub struct SeriesRunner<F, P, S, R = TracingRunReporter>
where
    F: Fetcher,
    P: ResultsParser,
    S: ResultStore,
    R: RunReporter,
{
    fetcher: F,
    parser: P,
    store: S,
    reporter: R,
    summary_scope: SummaryScope,
    registry: EventRegistry,
}

impl<F, P, S> SeriesRunner<F, P, S>
where
    F: Fetcher,
    P: ResultsParser,
    S: ResultStore,
{
    /// Create a runner that logs through `tracing`.
    pub fn new(fetcher: F, parser: P, store: S) -> Self {
        Self {
            fetcher,
            parser,
            store,
            reporter: TracingRunReporter,
            summary_scope: SummaryScope::default(),
            registry: EventRegistry::new(),
        }
    }
}

impl<F, P, S, R> SeriesRunner<F, P, S, R>
where
    F: Fetcher,
    P: ResultsParser,
    S: ResultStore,
    R: RunReporter,
{
    pub fn with_reporter<R2: RunReporter>(self, reporter: R2) -> SeriesRunner<F, P, S, R2> {
        SeriesRunner {
            fetcher: self.fetcher,
            parser: self.parser,
            store: self.store,
            reporter,
            summary_scope: self.summary_scope,
            registry: self.registry,
        }
    }

    pub fn with_summary_scope(mut self, scope: SummaryScope) -> Self {
        self.summary_scope = scope;
        self
    }

    /// Events accumulated so far.
    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> EventRegistry {
        self.registry
    }

    /// Scrape every series in order. Stops at the first error.
    pub async fn run(&mut self, series: &[Series]) -> Result<RunSummary, AppError> {
        let mut summary = RunSummary::default();

        for s in series {
            match self.scrape_series(s).await {
                Ok((scraped, skipped)) => {
                    summary.series += 1;
                    summary.scraped += scraped;
                    summary.skipped += skipped;
                }
                Err(error) => {
                    self.reporter.report(RunEvent::Aborted {
                        series: &s.label,
                        error: &error,
                    });
                    return Err(error);
                }
            }
        }

        self.reporter.report(RunEvent::Finished { summary: &summary });
        Ok(summary)
    }

    /// Scrape one series and write its summary file.
    ///
    /// 1. Fetch the landing page and list its event ids
    /// 2. Fetch, parse and save every event not seen before
    /// 3. Write the series summary
    ///
    /// Returns `(scraped, skipped)` event counts.
    pub async fn scrape_series(&mut self, series: &Series) -> Result<(usize, usize), AppError> {
        // 1. List
        self.reporter.report(RunEvent::SeriesStarted {
            series: &series.label,
            url: &series.url,
        });
        let html = self.fetcher.fetch(&series.url).await?;
        let event_ids = self.parser.parse_event_ids(&html)?;
        self.reporter.report(RunEvent::EventsListed {
            series: &series.label,
            count: event_ids.len(),
        });

        // 2. Scrape
        let (mut scraped, mut skipped) = (0, 0);
        for &event_id in &event_ids {
            if self.registry.contains(event_id) {
                self.reporter.report(RunEvent::EventSkipped {
                    series: &series.label,
                    event_id,
                });
                skipped += 1;
                continue;
            }

            let html = self.fetcher.fetch(&series.event_url(event_id)).await?;
            let event = self.parser.parse_event(event_id, &html)?;
            let event = self.registry.insert(event);
            self.reporter.report(RunEvent::EventScraped {
                series: &series.label,
                event,
            });
            self.store.save_event(event)?;
            scraped += 1;
        }

        // 3. Summarise
        let events = match self.summary_scope {
            SummaryScope::Accumulated => self.registry.all(),
            SummaryScope::Series => self.registry.select(&event_ids),
        };
        self.store.save_summary(&series.label, &events)?;
        self.reporter.report(RunEvent::SummaryWritten {
            series: &series.label,
            events: events.len(),
        });

        Ok((scraped, skipped))
    }
}
