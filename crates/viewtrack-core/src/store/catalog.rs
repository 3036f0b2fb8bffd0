//! Content catalog rows: the items reports enumerate.

use sqlx::Row;

use super::db::{unix_timestamp, ViewStore};
use super::types::{CatalogItem, ItemId};
use crate::error::TrackerError;

impl ViewStore {
    /// Insert a catalog item and return its id.
    pub async fn add_item(&self, title: &str) -> Result<ItemId, TrackerError> {
        let now = unix_timestamp();
        let row_id = sqlx::query(
            r#"
            INSERT INTO catalog_items (title, created_at)
            VALUES (?1, ?2)
            "#,
        )
        .bind(title)
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(row_id)
    }

    /// List all catalog items, oldest first. This is the enumeration
    /// order reports preserve.
    pub async fn list_items(&self) -> Result<Vec<CatalogItem>, TrackerError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title FROM catalog_items
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(CatalogItem {
                id: row.get("id"),
                title: row.get("title"),
            });
        }
        Ok(out)
    }

    /// Fetch one catalog item.
    pub async fn get_item(&self, id: ItemId) -> Result<Option<CatalogItem>, TrackerError> {
        let row = sqlx::query(
            r#"
            SELECT id, title FROM catalog_items
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| CatalogItem {
            id: row.get("id"),
            title: row.get("title"),
        }))
    }
}
