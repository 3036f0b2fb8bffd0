//! SQLite-backed view store implementation.
//!
//! Handles connection, migrations, and the timestamp helper. Event and
//! catalog operations live in `events` and `catalog`.

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Percent-encode a path for use in a sqlite:// URI so spaces and special chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

/// Handle to the SQLite-backed view store.
///
/// The database file is stored under the XDG state directory:
/// `~/.local/state/viewtrack/views.db`.
#[derive(Clone)]
pub struct ViewStore {
    pub(crate) pool: Pool<Sqlite>,
}

impl ViewStore {
    /// Open (or create) the default view store and run migrations.
    ///
    /// `max_connections` comes from `TrackerConfig::max_db_connections`.
    pub async fn open_default(max_connections: u32) -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("viewtrack")?;
        let state_dir = xdg_dirs.get_state_home();
        let db_path = state_dir.join("views.db");

        // Ensure parent directory exists.
        tokio::fs::create_dir_all(&state_dir).await?;

        let uri = path_to_sqlite_uri(&db_path) + "?mode=rwc";
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(&uri)
            .await?;

        let store = ViewStore { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Open (or create) the store at a specific path. Creates parent dirs if needed.
    /// Intended for tests so the DB can be placed in a temp directory.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let uri = path_to_sqlite_uri(path) + "?mode=rwc";
        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .connect(&uri)
            .await?;
        let store = ViewStore { pool };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> Result<(), sqlx::Error> {
        // Append-only event log. The two secondary indexes serve the
        // dedup check (item + visitor + time) and reporting (item + time).
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS view_events (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                item_id INTEGER NOT NULL,
                visitor_key TEXT NOT NULL,
                viewed_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS view_events_item_id ON view_events(item_id);",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS view_events_visitor_key ON view_events(visitor_key);",
        )
        .execute(&self.pool)
        .await?;

        // Content catalog enumerated by reports.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS catalog_items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                created_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Current time as Unix seconds. Core operations take `now` as an explicit
/// argument; callers that want wall-clock time pass this.
pub fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[cfg(test)]
/// Open an in-memory database for tests (no disk I/O).
pub(crate) async fn open_memory() -> Result<ViewStore> {
    // Single connection so the in-memory pool never hands back a different empty DB.
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let store = ViewStore { pool };
    store.migrate().await?;
    Ok(store)
}
