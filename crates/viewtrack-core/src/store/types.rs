//! Types used by the view/catalog database.

/// Content item identifier.
pub type ItemId = i64;

/// View event identifier.
pub type EventId = i64;

/// A recorded unique view. Rows are append-only: never updated or
/// deleted once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEvent {
    pub id: EventId,
    pub item_id: ItemId,
    /// Identifies the viewing client, e.g. its network address.
    pub visitor_key: String,
    /// Unix seconds, assigned at insert from the caller-supplied clock.
    pub viewed_at: i64,
}

/// A content item whose views are tracked.
///
/// The event log never stores titles, so a rename shows up on the next
/// report without touching events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
}

/// One report row: views for a single catalog item within the window.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ViewCountRow {
    pub item_id: ItemId,
    pub title: String,
    pub count: i64,
}
