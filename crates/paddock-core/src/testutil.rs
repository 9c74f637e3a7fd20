//! Test utilities: mock implementations of all core traits.
//!
//! Handwritten mocks for dependency injection in unit tests.
//! All mocks use `Arc<Mutex<_>>` for interior mutability, allowing
//! test assertions on recorded calls.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::models::{CarKind, Event, EventKind, Placement, Team};
use crate::traits::{Fetcher, ResultStore, ResultsParser};

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

/// Mock fetcher that serves pages by URL or from a response queue.
#[derive(Clone)]
pub struct MockFetcher {
    /// Fixed pages keyed by URL. Checked first.
    pages: Arc<Mutex<HashMap<String, String>>>,
    /// Queue of responses. Each call without a matching page pops the first
    /// element.
    responses: Arc<Mutex<Vec<Result<String, AppError>>>>,
    /// Every URL requested, in order.
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new(html: &str) -> Self {
        Self::with_responses(vec![Ok(html.to_string())])
    }

    pub fn with_error(error: AppError) -> Self {
        Self::with_responses(vec![Err(error)])
    }

    pub fn with_responses(responses: Vec<Result<String, AppError>>) -> Self {
        Self {
            pages: Arc::new(Mutex::new(HashMap::new())),
            responses: Arc::new(Mutex::new(responses)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Serve a fixed set of pages. Unknown URLs answer with an HTTP 404 error.
    pub fn with_pages<I, U, H>(pages: I) -> Self
    where
        I: IntoIterator<Item = (U, H)>,
        U: Into<String>,
        H: Into<String>,
    {
        let pages = pages
            .into_iter()
            .map(|(url, html)| (url.into(), html.into()))
            .collect();
        Self {
            pages: Arc::new(Mutex::new(pages)),
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        self.requests.lock().unwrap().push(url.to_string());

        let pages = self.pages.lock().unwrap();
        if let Some(html) = pages.get(url) {
            return Ok(html.clone());
        }

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            responses.remove(0)
        } else if !pages.is_empty() {
            Err(AppError::HttpError(format!("HTTP 404 for {url}")))
        } else {
            Ok("<html><body>default</body></html>".to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// MockParser
// ---------------------------------------------------------------------------

/// Mock parser that ignores the HTML and returns configured records.
#[derive(Clone)]
pub struct MockParser {
    /// Queue of event id lists, one per landing page parsed.
    event_ids: Arc<Mutex<Vec<Result<Vec<u32>, AppError>>>>,
    events: Arc<Mutex<HashMap<u32, Event>>>,
    /// Ids passed to `parse_event`, in order.
    pub parsed: Arc<Mutex<Vec<u32>>>,
}

impl MockParser {
    pub fn new(event_ids: Vec<Vec<u32>>, events: Vec<Event>) -> Self {
        Self {
            event_ids: Arc::new(Mutex::new(event_ids.into_iter().map(Ok).collect())),
            events: Arc::new(Mutex::new(
                events.into_iter().map(|e| (e.id, e)).collect(),
            )),
            parsed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_list_error(error: AppError) -> Self {
        Self {
            event_ids: Arc::new(Mutex::new(vec![Err(error)])),
            events: Arc::new(Mutex::new(HashMap::new())),
            parsed: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl ResultsParser for MockParser {
    fn parse_event_ids(&self, _html: &str) -> Result<Vec<u32>, AppError> {
        let mut queue = self.event_ids.lock().unwrap();
        if queue.is_empty() {
            Ok(Vec::new())
        } else {
            queue.remove(0)
        }
    }

    fn parse_event(&self, event_id: u32, _html: &str) -> Result<Event, AppError> {
        self.parsed.lock().unwrap().push(event_id);
        self.events
            .lock()
            .unwrap()
            .get(&event_id)
            .cloned()
            .ok_or_else(|| AppError::StructureError(format!("no mock event {event_id}")))
    }
}

// ---------------------------------------------------------------------------
// MockStore
// ---------------------------------------------------------------------------

/// Mock store that records what would have been written.
#[derive(Clone)]
pub struct MockStore {
    /// Ids of saved events, in order.
    pub saved: Arc<Mutex<Vec<u32>>>,
    /// `(series label, event ids)` of every summary written, in order.
    pub summaries: Arc<Mutex<Vec<(String, Vec<u32>)>>>,
    save_error: Arc<Mutex<Option<AppError>>>,
}

impl MockStore {
    pub fn empty() -> Self {
        Self {
            saved: Arc::new(Mutex::new(Vec::new())),
            summaries: Arc::new(Mutex::new(Vec::new())),
            save_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Store whose first `save_event` fails.
    pub fn with_save_error(error: AppError) -> Self {
        let store = Self::empty();
        *store.save_error.lock().unwrap() = Some(error);
        store
    }
}

impl ResultStore for MockStore {
    fn save_event(&self, event: &Event) -> Result<(), AppError> {
        if let Some(e) = self.save_error.lock().unwrap().take() {
            return Err(e);
        }
        self.saved.lock().unwrap().push(event.id);
        Ok(())
    }

    fn save_summary(&self, series_label: &str, events: &[&Event]) -> Result<(), AppError> {
        self.summaries.lock().unwrap().push((
            series_label.to_string(),
            events.iter().map(|e| e.id).collect(),
        ));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A team with every discipline scored.
pub fn make_test_team(name: &str, place: u32) -> Team {
    let placement = Some(Placement {
        place,
        score: 50.0,
    });
    Team {
        name: name.to_string(),
        country: "DE".to_string(),
        kind: CarKind::Electric,
        place,
        cost: placement,
        business_plan: placement,
        engineering_design: placement,
        acceleration: placement,
        skid_pad: placement,
        autocross: placement,
        endurance: placement,
        efficiency: placement,
        penalty: 0.0,
        total: 400.0,
    }
}

/// An event with `teams` generated teams.
pub fn make_test_event(id: u32, kind: EventKind, teams: usize) -> Event {
    Event {
        id,
        kind,
        name: format!("Event {id}"),
        results: (1..=teams as u32)
            .map(|place| make_test_team(&format!("Team {place}"), place))
            .collect(),
    }
}
