use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;
use crate::models::Series;
use crate::throttle::DEFAULT_PAUSE;

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Which events a series summary file lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryScope {
    /// Every event scraped so far in the run, across all series.
    #[default]
    Accumulated,
    /// Only the events listed on the series' own landing page.
    Series,
}

impl SummaryScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryScope::Accumulated => "accumulated",
            SummaryScope::Series => "series",
        }
    }
}

impl fmt::Display for SummaryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SummaryScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accumulated" => Ok(SummaryScope::Accumulated),
            "series" => Ok(SummaryScope::Series),
            _ => Err(format!("Unknown summary scope: {}", s)),
        }
    }
}

/// Configuration for one scraping run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Series to scrape, in order.
    pub series: Vec<Series>,
    /// Minimum pause between two requests.
    pub pause: Duration,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// Root directory for output files. Per-event files go to `events/`.
    pub output_dir: PathBuf,
    pub summary_scope: SummaryScope,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            series: vec![
                Series::new("FSE", "https://fs-world.org/E"),
                Series::new("FSC", "https://fs-world.org/C"),
            ],
            pause: DEFAULT_PAUSE,
            timeout: DEFAULT_TIMEOUT,
            output_dir: PathBuf::from("data"),
            summary_scope: SummaryScope::default(),
        }
    }
}

impl RunConfig {
    /// Defaults overridden by environment variables.
    ///
    /// - `PADDOCK_OUTPUT_DIR` (optional, defaults to `data`)
    /// - `PADDOCK_PAUSE_SECS` (optional, defaults to 1)
    /// - `PADDOCK_TIMEOUT_SECS` (optional, defaults to 30)
    /// - `PADDOCK_SUMMARY_SCOPE` (optional, `accumulated` or `series`)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, AppError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("PADDOCK_OUTPUT_DIR") {
            if dir.trim().is_empty() {
                return Err(AppError::ConfigError(
                    "PADDOCK_OUTPUT_DIR must not be empty".into(),
                ));
            }
            config.output_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup("PADDOCK_PAUSE_SECS") {
            let secs: f64 = raw.trim().parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "Invalid PADDOCK_PAUSE_SECS '{raw}': must be a number of seconds"
                ))
            })?;
            config.pause = Duration::try_from_secs_f64(secs).map_err(|_| {
                AppError::ConfigError(format!(
                    "Invalid PADDOCK_PAUSE_SECS '{raw}': must be zero or positive"
                ))
            })?;
        }

        if let Some(raw) = lookup("PADDOCK_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "Invalid PADDOCK_TIMEOUT_SECS '{raw}': must be a positive integer"
                ))
            })?;
            if secs == 0 {
                return Err(AppError::ConfigError(
                    "PADDOCK_TIMEOUT_SECS must be at least 1".into(),
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = lookup("PADDOCK_SUMMARY_SCOPE") {
            config.summary_scope = raw.trim().parse().map_err(AppError::ConfigError)?;
        }

        Ok(config)
    }
}
