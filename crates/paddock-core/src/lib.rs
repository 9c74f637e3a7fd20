pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod report;
pub mod scrape;
pub mod testutil;
pub mod throttle;
pub mod traits;

pub use config::{RunConfig, SummaryScope};
pub use error::AppError;
pub use models::{CarKind, Event, EventKind, Placement, Series, Team};
pub use registry::EventRegistry;
pub use report::{RunEvent, RunReporter, RunSummary, TracingRunReporter};
pub use scrape::SeriesRunner;
pub use throttle::PacedFetcher;
pub use traits::{Fetcher, NullStore, ResultStore, ResultsParser};
