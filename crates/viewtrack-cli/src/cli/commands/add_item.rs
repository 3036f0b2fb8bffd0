//! `viewtrack add-item <title>` – add a content item to the catalog.

use anyhow::Result;
use viewtrack_core::store::ViewStore;

pub async fn run_add_item(store: &ViewStore, title: &str) -> Result<()> {
    if title.trim().is_empty() {
        anyhow::bail!("item title must be non-empty");
    }
    let id = store.add_item(title).await?;
    println!("Added item {id}: {title}");
    Ok(())
}
