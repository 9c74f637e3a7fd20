//! Request pacing for polite fetching.
//!
//! Wraps any [`Fetcher`] so that consecutive requests are separated by at
//! least a fixed pause. The pause is measured from the moment the previous
//! request finished to the moment the next one starts, and it is shared by
//! every clone of the wrapper regardless of the target host.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use paddock_core::throttle::PacedFetcher;
//!
//! # use paddock_core::traits::Fetcher;
//! # #[derive(Clone)] struct MyFetcher;
//! # impl Fetcher for MyFetcher {
//! #     async fn fetch(&self, _: &str) -> Result<String, paddock_core::error::AppError> { todo!() }
//! # }
//! let fetcher = PacedFetcher::new(MyFetcher, Duration::from_secs(1));
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::error::AppError;
use crate::traits::Fetcher;

/// Default pause between two requests.
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(1);

/// A [`Fetcher`] wrapper that enforces a minimum pause between requests.
///
/// The lock is held for the whole request, so requests issued through
/// clones of the same wrapper are serialised as well as paced.
#[derive(Clone)]
pub struct PacedFetcher<F> {
    inner: F,
    pause: Duration,
    /// When the last request finished. `None` before the first request.
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl<F: Fetcher> PacedFetcher<F> {
    pub fn new(inner: F, pause: Duration) -> Self {
        Self {
            inner,
            pause,
            last_request: Arc::new(Mutex::new(None)),
        }
    }
}

/// How long to wait before the next request may start.
fn remaining_pause(last: Option<Instant>, pause: Duration, now: Instant) -> Duration {
    match last {
        Some(last) => pause.saturating_sub(now.saturating_duration_since(last)),
        None => Duration::ZERO,
    }
}

impl<F: Fetcher> Fetcher for PacedFetcher<F> {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        let mut last = self.last_request.lock().await;

        let wait = remaining_pause(*last, self.pause, Instant::now());
        if !wait.is_zero() {
            tracing::debug!(url = %url, sleep_ms = %wait.as_millis(), "Pacing request");
            tokio::time::sleep(wait).await;
        }

        let result = self.inner.fetch(url).await;
        *last = Some(Instant::now());
        result
    }
}
