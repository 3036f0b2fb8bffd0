//! View Aggregator: per-item view counts over a named lookback window.

use std::collections::HashMap;

use crate::error::TrackerError;
use crate::store::{CatalogItem, ItemId, ViewCountRow, ViewStore};
use crate::window::ReportWindow;

/// Computes report rows against an injected store handle.
#[derive(Clone)]
pub struct ViewAggregator {
    store: ViewStore,
}

impl ViewAggregator {
    pub fn new(store: ViewStore) -> Self {
        Self { store }
    }

    /// One row per catalog item, in catalog order, counting events with
    /// `viewed_at` strictly inside the window ending at `now`. Items with
    /// no qualifying events get a zero row rather than being dropped.
    ///
    /// `items` is the catalog enumeration the caller supplies; titles come
    /// from there, never from the event log. A single grouped query
    /// replaces the per-item count loop and returns identical numbers.
    pub async fn aggregate_views(
        &self,
        items: &[CatalogItem],
        window: ReportWindow,
        now: i64,
    ) -> Result<Vec<ViewCountRow>, TrackerError> {
        let since = now - window.secs();
        let counts: HashMap<ItemId, i64> = self
            .store
            .count_events_grouped(since)
            .await?
            .into_iter()
            .collect();

        let rows = items
            .iter()
            .map(|item| ViewCountRow {
                item_id: item.id,
                title: item.title.clone(),
                count: counts.get(&item.id).copied().unwrap_or(0),
            })
            .collect();
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::db::open_memory;
    use crate::store::ViewStore;

    const HOUR: i64 = 3600;
    const T: i64 = 1_700_000_000;

    fn catalog(items: &[(i64, &str)]) -> Vec<CatalogItem> {
        items
            .iter()
            .map(|(id, title)| CatalogItem {
                id: *id,
                title: (*title).to_string(),
            })
            .collect()
    }

    async fn seeded_store() -> ViewStore {
        let store = open_memory().await.unwrap();
        // Item 1: two distinct visitors inside the last day.
        store.insert_event(1, "v1", T).await.unwrap();
        store.insert_event(1, "v2", T).await.unwrap();
        store
    }

    #[tokio::test]
    async fn one_row_per_item_in_catalog_order_with_zero_fill() {
        let store = seeded_store().await;
        let aggregator = ViewAggregator::new(store);

        let items = catalog(&[(1, "A"), (2, "B")]);
        let rows = aggregator
            .aggregate_views(&items, ReportWindow::LastDay, T + 2 * HOUR)
            .await
            .unwrap();

        assert_eq!(
            rows,
            vec![
                ViewCountRow {
                    item_id: 1,
                    title: "A".to_string(),
                    count: 2
                },
                ViewCountRow {
                    item_id: 2,
                    title: "B".to_string(),
                    count: 0
                },
            ]
        );
    }

    #[tokio::test]
    async fn catalog_order_is_preserved_verbatim() {
        let store = seeded_store().await;
        let aggregator = ViewAggregator::new(store);

        // Reversed enumeration: rows must follow it, not id order.
        let items = catalog(&[(2, "B"), (1, "A")]);
        let rows = aggregator
            .aggregate_views(&items, ReportWindow::LastDay, T + HOUR)
            .await
            .unwrap();
        assert_eq!(rows[0].item_id, 2);
        assert_eq!(rows[0].count, 0);
        assert_eq!(rows[1].item_id, 1);
        assert_eq!(rows[1].count, 2);
    }

    #[tokio::test]
    async fn events_outside_the_window_are_excluded() {
        let store = open_memory().await.unwrap();
        store.insert_event(1, "v1", T).await.unwrap();
        let aggregator = ViewAggregator::new(store);
        let items = catalog(&[(1, "A")]);

        // 25 hours later the event is outside LastDay.
        let rows = aggregator
            .aggregate_views(&items, ReportWindow::LastDay, T + 25 * HOUR)
            .await
            .unwrap();
        assert_eq!(rows[0].count, 0);

        // A wider window still sees it.
        let rows = aggregator
            .aggregate_views(&items, ReportWindow::LastWeek, T + 25 * HOUR)
            .await
            .unwrap();
        assert_eq!(rows[0].count, 1);
    }

    #[tokio::test]
    async fn window_boundary_is_strictly_exclusive() {
        let store = open_memory().await.unwrap();
        store.insert_event(1, "v1", T).await.unwrap();
        let aggregator = ViewAggregator::new(store);
        let items = catalog(&[(1, "A")]);

        // Event sits exactly at now - window: excluded.
        let rows = aggregator
            .aggregate_views(&items, ReportWindow::LastDay, T + ReportWindow::LastDay.secs())
            .await
            .unwrap();
        assert_eq!(rows[0].count, 0);

        // One second earlier it is still inside.
        let rows = aggregator
            .aggregate_views(
                &items,
                ReportWindow::LastDay,
                T + ReportWindow::LastDay.secs() - 1,
            )
            .await
            .unwrap();
        assert_eq!(rows[0].count, 1);
    }

    #[tokio::test]
    async fn events_for_unknown_items_produce_no_rows() {
        let store = open_memory().await.unwrap();
        store.insert_event(7, "v1", T).await.unwrap();
        let aggregator = ViewAggregator::new(store);

        let rows = aggregator
            .aggregate_views(&catalog(&[(1, "A")]), ReportWindow::LastDay, T + HOUR)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item_id, 1);
        assert_eq!(rows[0].count, 0);
    }

    #[tokio::test]
    async fn empty_catalog_yields_empty_report() {
        let store = seeded_store().await;
        let aggregator = ViewAggregator::new(store);
        let rows = aggregator
            .aggregate_views(&[], ReportWindow::LastDay, T + HOUR)
            .await
            .unwrap();
        assert!(rows.is_empty());
    }
}
