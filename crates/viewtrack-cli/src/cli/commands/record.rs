//! `viewtrack record <item-id> <visitor>` – record a unique view.

use anyhow::Result;
use viewtrack_core::recorder::{RecordOutcome, ViewRecorder};
use viewtrack_core::store::unix_timestamp;

pub async fn run_record(recorder: &ViewRecorder, item_id: i64, visitor: &str) -> Result<()> {
    match recorder.record_view(item_id, visitor, unix_timestamp()).await? {
        RecordOutcome::Recorded(event_id) => {
            println!("Recorded view {event_id} for item {item_id}");
        }
        RecordOutcome::Deduplicated => {
            println!("View of item {item_id} already counted in the last 24h");
        }
    }
    Ok(())
}
