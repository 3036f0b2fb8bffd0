//! `viewtrack report` – per-item view counts over a window, rendered as a
//! table with ASCII bars or as JSON.

use anyhow::Result;
use viewtrack_core::aggregator::ViewAggregator;
use viewtrack_core::config::TrackerConfig;
use viewtrack_core::store::{unix_timestamp, ViewCountRow, ViewStore};
use viewtrack_core::window::ReportWindow;

const DEFAULT_CHART_WIDTH: usize = 40;
const TITLE_COLUMN: usize = 30;

pub async fn run_report(
    store: &ViewStore,
    aggregator: &ViewAggregator,
    cfg: &TrackerConfig,
    window_name: Option<&str>,
    json: bool,
) -> Result<()> {
    let name = window_name
        .or(cfg.default_window.as_deref())
        .unwrap_or("1day");
    let window = ReportWindow::from_name(name);

    let items = store.list_items().await?;
    let rows = aggregator
        .aggregate_views(&items, window, unix_timestamp())
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No items in catalog.");
        return Ok(());
    }

    println!("Views in the last {}:", window.label());
    let width = cfg.chart_width.unwrap_or(DEFAULT_CHART_WIDTH);
    let max = rows.iter().map(|r| r.count).max().unwrap_or(0);
    println!("{:<6} {:<30} {:>7}", "ID", "TITLE", "VIEWS");
    for r in &rows {
        println!(
            "{:<6} {:<30} {:>7} {}",
            r.item_id,
            truncate(&r.title, TITLE_COLUMN),
            r.count,
            bar(r, max, width)
        );
    }
    Ok(())
}

/// Bar length scaled against the busiest item, like the report chart.
fn bar(row: &ViewCountRow, max: i64, width: usize) -> String {
    if max == 0 || row.count == 0 {
        return String::new();
    }
    let len = ((row.count as f64 / max as f64) * width as f64).round() as usize;
    "#".repeat(len.max(1))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(count: i64) -> ViewCountRow {
        ViewCountRow {
            item_id: 1,
            title: "A".to_string(),
            count,
        }
    }

    #[test]
    fn bar_scales_against_max() {
        assert_eq!(bar(&row(10), 10, 40).len(), 40);
        assert_eq!(bar(&row(5), 10, 40).len(), 20);
        assert_eq!(bar(&row(0), 10, 40).len(), 0);
        // A nonzero count always shows at least one mark.
        assert_eq!(bar(&row(1), 1000, 40).len(), 1);
    }

    #[test]
    fn bar_is_empty_when_all_counts_are_zero() {
        assert_eq!(bar(&row(0), 0, 40), "");
    }

    #[test]
    fn truncate_keeps_short_titles_and_shortens_long_ones() {
        assert_eq!(truncate("short", 30), "short");
        let long = "x".repeat(40);
        let t = truncate(&long, 30);
        assert_eq!(t.chars().count(), 30);
        assert!(t.ends_with('…'));
    }
}
