//! `viewtrack items` – list catalog items.

use anyhow::Result;
use viewtrack_core::store::ViewStore;

pub async fn run_items(store: &ViewStore) -> Result<()> {
    let items = store.list_items().await?;
    if items.is_empty() {
        println!("No items in catalog.");
    } else {
        println!("{:<6} TITLE", "ID");
        for item in items {
            println!("{:<6} {}", item.id, item.title);
        }
    }
    Ok(())
}
