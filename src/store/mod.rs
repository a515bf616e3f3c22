pub mod memory;
pub mod seed;

pub use memory::MemoryStore;

use thiserror::Error;

use crate::domain::{CreateEventInput, Event, Metric};

/// Failure reported by a storage backend.
///
/// `MemoryStore` never produces one; the variants exist for backends that
/// can actually fail.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("{0}")]
    Backend(String),
}

/// Persistence seam between the HTTP layer and whatever holds the data.
///
/// Calls are synchronous and cheap; handlers invoke them directly from
/// async context without holding anything across an `.await`.
pub trait Store: Send + Sync {
    /// Newest-first snapshot, truncated to `limit` (non-positive or
    /// oversized limits mean "everything").
    fn list_events(&self, limit: i64) -> Result<Vec<Event>, StoreError>;

    /// Assigns an ID and timestamp, then appends.
    fn create_event(&self, input: CreateEventInput) -> Result<Event, StoreError>;

    /// The trailing `count` metrics by storage order, ascending by date.
    fn list_metrics(&self, count: i64) -> Result<Vec<Metric>, StoreError>;
}

/// Resolves a requested window size against what is available.
fn window(requested: i64, available: usize) -> usize {
    match usize::try_from(requested) {
        Ok(n) if n > 0 && n <= available => n,
        _ => available,
    }
}

#[cfg(test)]
mod tests {
    use super::window;

    #[test]
    fn window_defaults_to_everything() {
        assert_eq!(window(0, 5), 5);
        assert_eq!(window(-3, 5), 5);
        assert_eq!(window(9, 5), 5);
        assert_eq!(window(i64::MAX, 5), 5);
        assert_eq!(window(2, 5), 2);
        assert_eq!(window(5, 5), 5);
        assert_eq!(window(1, 0), 0);
    }
}
