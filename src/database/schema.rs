//! Database schema migrations

use anyhow::Result;
use sqlx::{Pool, Sqlite};

/// Run database migrations to create/update schema
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<()> {
    // Tags table. Label uniqueness is checked by TagListModel, not here.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tags (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            label TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Videos table. Column order is read positionally by VideoItem::from_row.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS videos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            date TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            path TEXT NOT NULL,
            thumbnail TEXT NOT NULL DEFAULT '',
            tag_id INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_videos_tag_id ON videos(tag_id);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
