use std::future::Future;

use crate::error::AppError;
use crate::models::Event;

/// Fetches raw HTML content from a URL.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, AppError>> + Send;
}

/// Turns result pages into typed records.
pub trait ResultsParser: Send + Sync + Clone {
    /// Event ids offered by a series landing page, in page order.
    fn parse_event_ids(&self, html: &str) -> Result<Vec<u32>, AppError>;

    /// The full results of one event detail page.
    fn parse_event(&self, event_id: u32, html: &str) -> Result<Event, AppError>;
}

/// Persists scraped events.
pub trait ResultStore: Send + Sync + Clone {
    /// Write the per-event results file.
    fn save_event(&self, event: &Event) -> Result<(), AppError>;

    /// Write (overwrite) the summary file of a series.
    fn save_summary(&self, series_label: &str, events: &[&Event]) -> Result<(), AppError>;
}

/// A no-op ResultStore for use when persistence is not needed.
#[derive(Debug, Clone)]
pub struct NullStore;

impl ResultStore for NullStore {
    fn save_event(&self, _event: &Event) -> Result<(), AppError> {
        Ok(())
    }

    fn save_summary(&self, _series_label: &str, _events: &[&Event]) -> Result<(), AppError> {
        Ok(())
    }
}
