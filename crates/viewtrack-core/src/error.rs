//! Classified errors for record/report operations.

use thiserror::Error;

/// Error returned by the recorder, aggregator, and store operations.
///
/// A `Store` error means the outcome is indeterminate; it must never be
/// read as "zero views" or "not recorded".
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The backing store could not be reached or a query failed.
    #[error("view store unavailable: {0}")]
    Store(#[from] sqlx::Error),

    /// A view was submitted without a visitor key.
    #[error("visitor key must be non-empty")]
    EmptyVisitorKey,

    /// Item ids are positive row ids; anything else is a caller bug.
    #[error("invalid item id: {0}")]
    InvalidItemId(i64),
}
