//! Event write operations: plain insert and the transactional
//! record-if-new used by the recorder.

use sqlx::Row;

use super::super::db::ViewStore;
use super::super::types::{EventId, ItemId};
use crate::error::TrackerError;

impl ViewStore {
    /// Insert a view event with the given timestamp and return its id.
    ///
    /// No dedup is applied here; `record_view_if_new` is the checked path.
    pub async fn insert_event(
        &self,
        item_id: ItemId,
        visitor_key: &str,
        viewed_at: i64,
    ) -> Result<EventId, TrackerError> {
        let row_id = sqlx::query(
            r#"
            INSERT INTO view_events (item_id, visitor_key, viewed_at)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(item_id)
        .bind(visitor_key)
        .bind(viewed_at)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(row_id)
    }

    /// Atomically insert a view event unless the same `(item, visitor)`
    /// pair already has one with `viewed_at > now - window_secs`. The
    /// check and the insert share one transaction so two concurrent
    /// requests from the same visitor cannot both pass the check.
    ///
    /// Returns the new event id, or `None` when the view was deduplicated.
    pub async fn record_view_if_new(
        &self,
        item_id: ItemId,
        visitor_key: &str,
        now: i64,
        window_secs: i64,
    ) -> Result<Option<EventId>, TrackerError> {
        let since = now - window_secs;
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS n FROM view_events
            WHERE item_id = ?1 AND visitor_key = ?2 AND viewed_at > ?3
            "#,
        )
        .bind(item_id)
        .bind(visitor_key)
        .bind(since)
        .fetch_one(&mut *tx)
        .await?;
        let recent: i64 = row.get("n");
        if recent > 0 {
            tx.commit().await?;
            return Ok(None);
        }

        let id = sqlx::query(
            r#"
            INSERT INTO view_events (item_id, visitor_key, viewed_at)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(item_id)
        .bind(visitor_key)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        tx.commit().await?;
        Ok(Some(id))
    }
}
