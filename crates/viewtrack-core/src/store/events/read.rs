//! Event read operations: counts for dedup checks and reporting.

use sqlx::Row;

use super::super::db::ViewStore;
use super::super::types::{EventId, ItemId, ViewEvent};
use crate::error::TrackerError;

impl ViewStore {
    /// Count events for an item with `viewed_at` strictly after `since`.
    /// `visitor_key = Some(..)` narrows the count to one visitor, which is
    /// the dedup check; `None` counts across all visitors.
    pub async fn count_events(
        &self,
        item_id: ItemId,
        visitor_key: Option<&str>,
        since: i64,
    ) -> Result<i64, TrackerError> {
        let row = match visitor_key {
            Some(visitor) => {
                sqlx::query(
                    r#"
                    SELECT COUNT(*) AS n FROM view_events
                    WHERE item_id = ?1 AND visitor_key = ?2 AND viewed_at > ?3
                    "#,
                )
                .bind(item_id)
                .bind(visitor)
                .bind(since)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT COUNT(*) AS n FROM view_events
                    WHERE item_id = ?1 AND viewed_at > ?2
                    "#,
                )
                .bind(item_id)
                .bind(since)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(row.get("n"))
    }

    /// Per-item event counts with `viewed_at` strictly after `since`, in a
    /// single grouped query. Items with no qualifying events are absent
    /// from the result; the aggregator zero-fills from the catalog.
    pub async fn count_events_grouped(
        &self,
        since: i64,
    ) -> Result<Vec<(ItemId, i64)>, TrackerError> {
        let rows = sqlx::query(
            r#"
            SELECT item_id, COUNT(*) AS n FROM view_events
            WHERE viewed_at > ?1
            GROUP BY item_id
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let item_id: i64 = row.get("item_id");
            let n: i64 = row.get("n");
            out.push((item_id, n));
        }
        Ok(out)
    }

    /// Fetch a single event row.
    pub async fn get_event(&self, id: EventId) -> Result<Option<ViewEvent>, TrackerError> {
        let row = sqlx::query(
            r#"
            SELECT id, item_id, visitor_key, viewed_at
            FROM view_events
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| ViewEvent {
            id: row.get("id"),
            item_id: row.get("item_id"),
            visitor_key: row.get("visitor_key"),
            viewed_at: row.get("viewed_at"),
        }))
    }
}
