//! View Recorder: at most one counted view per (item, visitor) per
//! rolling 24-hour window.

use crate::error::TrackerError;
use crate::store::{EventId, ItemId, ViewStore};

/// Dedup window in seconds. Fixed at 24 hours regardless of the window
/// a report later selects.
pub const DEDUP_WINDOW_SECS: i64 = 24 * 3600;

/// Outcome of a `record_view` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A new event was stored.
    Recorded(EventId),
    /// The pair already had a counted view inside the window; nothing stored.
    Deduplicated,
}

impl RecordOutcome {
    pub fn recorded(self) -> bool {
        matches!(self, RecordOutcome::Recorded(_))
    }
}

/// Records unique views against an injected store handle.
#[derive(Clone)]
pub struct ViewRecorder {
    store: ViewStore,
}

impl ViewRecorder {
    pub fn new(store: ViewStore) -> Self {
        Self { store }
    }

    /// Record a view of `item_id` by `visitor_key` at `now` (Unix seconds),
    /// unless the same pair was already counted inside the last 24 hours.
    ///
    /// `now` is an explicit argument so the clock stays injectable; callers
    /// wanting wall-clock time pass `store::unix_timestamp()`. Whether the
    /// item exists in the catalog is the caller's concern; only the id's
    /// shape is validated here.
    pub async fn record_view(
        &self,
        item_id: ItemId,
        visitor_key: &str,
        now: i64,
    ) -> Result<RecordOutcome, TrackerError> {
        if item_id <= 0 {
            return Err(TrackerError::InvalidItemId(item_id));
        }
        if visitor_key.is_empty() {
            return Err(TrackerError::EmptyVisitorKey);
        }

        let inserted = self
            .store
            .record_view_if_new(item_id, visitor_key, now, DEDUP_WINDOW_SECS)
            .await?;

        match inserted {
            Some(id) => {
                tracing::debug!("recorded view event {} for item {}", id, item_id);
                Ok(RecordOutcome::Recorded(id))
            }
            None => {
                tracing::debug!("deduplicated repeat view for item {}", item_id);
                Ok(RecordOutcome::Deduplicated)
            }
        }
    }
}
