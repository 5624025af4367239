//! Video CRUD operations

use anyhow::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Sqlite};

use crate::database::NewVideo;

/// Escape LIKE wildcards so the search text matches literally
fn like_pattern(search: &str) -> String {
    let escaped = search
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// Raw rows of all videos under a tag, optionally narrowed by title
pub async fn query_videos(
    pool: &Pool<Sqlite>,
    tag_id: i64,
    search: Option<&str>,
) -> Result<Vec<SqliteRow>> {
    let rows = match search {
        Some(search) => {
            sqlx::query(
                "SELECT * FROM videos WHERE tag_id = ? AND title LIKE ? ESCAPE '\\' ORDER BY id",
            )
            .bind(tag_id)
            .bind(like_pattern(search))
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query("SELECT * FROM videos WHERE tag_id = ? ORDER BY id")
                .bind(tag_id)
                .fetch_all(pool)
                .await?
        }
    };
    Ok(rows)
}

/// Insert a new video
pub async fn insert_video(pool: &Pool<Sqlite>, video: NewVideo) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO videos (title, date, description, path, thumbnail, tag_id) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&video.title)
    .bind(&video.date)
    .bind(&video.description)
    .bind(&video.path)
    .bind(&video.thumbnail)
    .bind(video.tag_id)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Rename a video
pub async fn update_video_title(pool: &Pool<Sqlite>, id: i64, title: &str) -> Result<()> {
    sqlx::query("UPDATE videos SET title = ? WHERE id = ?")
        .bind(title)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete video by id
pub async fn delete_video(pool: &Pool<Sqlite>, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM videos WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("cat"), "%cat%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
    }
}
