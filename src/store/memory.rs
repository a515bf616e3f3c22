use chrono::Utc;
use parking_lot::RwLock;

use super::{seed, window, Store, StoreError};
use crate::domain::{CreateEventInput, Event, Metric};

// ─── Public types ────────────────────────────────────────────────

/// In-process store. One lock guards both collections jointly, so an
/// event write also excludes metric reads for its duration.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

// ─── Internal state ──────────────────────────────────────────────

struct Inner {
    /// Storage order = creation order
    events: Vec<Event>,
    /// Fixed at construction
    metrics: Vec<Metric>,
}

// ─── MemoryStore impl ────────────────────────────────────────────

impl MemoryStore {
    /// Store pre-populated with the seed dataset so a UI can render
    /// immediately.
    pub fn seeded() -> Self {
        let now = Utc::now();
        Self::with_data(seed::events(now), seed::metrics(now))
    }

    pub fn with_data(events: Vec<Event>, metrics: Vec<Metric>) -> Self {
        Self {
            inner: RwLock::new(Inner { events, metrics }),
        }
    }

    pub fn event_count(&self) -> usize {
        self.inner.read().events.len()
    }

    pub fn metric_count(&self) -> usize {
        self.inner.read().metrics.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::with_data(Vec::new(), Vec::new())
    }
}

impl Store for MemoryStore {
    fn list_events(&self, limit: i64) -> Result<Vec<Event>, StoreError> {
        let inner = self.inner.read();

        // Newest first; on equal timestamps the later-stored event wins
        let mut cloned = inner.events.clone();
        cloned.reverse();
        cloned.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        cloned.truncate(window(limit, cloned.len()));

        Ok(cloned)
    }

    fn create_event(&self, input: CreateEventInput) -> Result<Event, StoreError> {
        let mut inner = self.inner.write();

        // Stamped under the write lock so storage order matches time order
        let event = Event {
            id: uuid::Uuid::new_v4().to_string(),
            title: input.title,
            content: input.content,
            mood: input.mood,
            tags: input.tags,
            media_refs: input.media_refs,
            occurred_at: Utc::now(),
        };
        inner.events.push(event.clone());
        drop(inner);

        tracing::debug!(id = %event.id, "event created");
        Ok(event)
    }

    fn list_metrics(&self, count: i64) -> Result<Vec<Metric>, StoreError> {
        let inner = self.inner.read();

        let take = window(count, inner.metrics.len());
        let mut latest = inner.metrics[inner.metrics.len() - take..].to_vec();
        latest.sort_by(|a, b| a.date.cmp(&b.date));

        Ok(latest)
    }
}
