//! Tag CRUD operations

use anyhow::Result;
use sqlx::{Pool, Sqlite};

use crate::database::DbTag;

/// Get all tags in creation order
pub async fn get_all_tags(pool: &Pool<Sqlite>) -> Result<Vec<DbTag>> {
    let tags = sqlx::query_as::<_, DbTag>("SELECT id, label FROM tags ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(tags)
}

/// Create a new tag
pub async fn insert_tag(pool: &Pool<Sqlite>, label: &str) -> Result<i64> {
    let result = sqlx::query("INSERT INTO tags (label) VALUES (?)")
        .bind(label)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Update a tag label
pub async fn update_tag_label(pool: &Pool<Sqlite>, id: i64, label: &str) -> Result<()> {
    sqlx::query("UPDATE tags SET label = ? WHERE id = ?")
        .bind(label)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
