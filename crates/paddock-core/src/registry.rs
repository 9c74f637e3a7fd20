use std::collections::HashMap;

use crate::models::Event;

/// Events scraped during one run, keyed by id, in first-insertion order.
///
/// An id is stored at most once; mixed events listed by several series
/// keep the record from their first encounter.
#[derive(Debug, Default)]
pub struct EventRegistry {
    events: Vec<Event>,
    index: HashMap<u32, usize>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, event_id: u32) -> bool {
        self.index.contains_key(&event_id)
    }

    pub fn get(&self, event_id: u32) -> Option<&Event> {
        self.index.get(&event_id).map(|&i| &self.events[i])
    }

    /// Insert an event and return a reference to the stored record.
    ///
    /// If the id is already present the existing record is kept and
    /// returned; the new one is dropped.
    pub fn insert(&mut self, event: Event) -> &Event {
        let next = self.events.len();
        let i = *self.index.entry(event.id).or_insert(next);
        if i == next {
            self.events.push(event);
        }
        &self.events[i]
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Every event, in insertion order.
    pub fn all(&self) -> Vec<&Event> {
        self.events.iter().collect()
    }

    /// The stored events for `ids`, in the order given. Unknown ids are
    /// skipped and repeated ids appear once.
    pub fn select(&self, ids: &[u32]) -> Vec<&Event> {
        let mut seen = Vec::with_capacity(ids.len());
        ids.iter()
            .filter(|id| {
                if seen.contains(*id) {
                    false
                } else {
                    seen.push(**id);
                    true
                }
            })
            .filter_map(|&id| self.get(id))
            .collect()
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}
