//! Database repository - main entry point
//! Delegates to ops modules for actual operations

use anyhow::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Sqlite, sqlite::SqlitePoolOptions};
use std::path::Path;

use super::{models::*, ops, schema};

/// Database connection pool wrapper
#[derive(Debug)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create and initialize database at the given path
    pub async fn new(db_path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await?;

        // WAL keeps grid reads from blocking on library writes
        sqlx::query("PRAGMA journal_mode = WAL")
            .execute(&pool)
            .await?;

        sqlx::query("PRAGMA synchronous = NORMAL")
            .execute(&pool)
            .await?;

        schema::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a throwaway in-memory database
    ///
    /// Every SQLite connection gets its own `:memory:` database, so the pool
    /// is pinned to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        schema::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    // ============ Tag Operations ============

    pub async fn get_all_tags(&self) -> Result<Vec<DbTag>> {
        ops::get_all_tags(&self.pool).await
    }

    pub async fn insert_tag(&self, label: &str) -> Result<i64> {
        ops::insert_tag(&self.pool, label).await
    }

    pub async fn update_tag_label(&self, id: i64, label: &str) -> Result<()> {
        ops::update_tag_label(&self.pool, id, label).await
    }

    // ============ Video Operations ============

    pub async fn query_videos(&self, tag_id: i64, search: Option<&str>) -> Result<Vec<SqliteRow>> {
        ops::query_videos(&self.pool, tag_id, search).await
    }

    pub async fn insert_video(&self, video: NewVideo) -> Result<i64> {
        ops::insert_video(&self.pool, video).await
    }

    /// Insert one video per file under `tag_id`, dated today
    pub async fn import_videos(&self, paths: &[std::path::PathBuf], tag_id: i64) -> Result<usize> {
        let date = ops::today();
        let mut inserted = 0;
        for path in paths {
            let video = NewVideo::from_path(path, tag_id, date.clone());
            ops::insert_video(&self.pool, video).await?;
            inserted += 1;
        }
        Ok(inserted)
    }

    pub async fn update_video_title(&self, id: i64, title: &str) -> Result<()> {
        ops::update_video_title(&self.pool, id, title).await
    }

    pub async fn delete_video(&self, id: i64) -> Result<()> {
        ops::delete_video(&self.pool, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn video(title: &str, tag_id: i64) -> NewVideo {
        NewVideo {
            title: title.to_string(),
            date: "2024-01-02".to_string(),
            description: format!("{} description", title),
            path: format!("/videos/{}.mp4", title),
            thumbnail: String::new(),
            tag_id,
        }
    }

    #[tokio::test]
    async fn tags_round_trip() {
        let db = Database::in_memory().await.unwrap();
        let a = db.insert_tag("Travel").await.unwrap();
        let b = db.insert_tag("Family").await.unwrap();

        db.update_tag_label(b, "Kids").await.unwrap();

        let tags = db.get_all_tags().await.unwrap();
        assert_eq!(
            tags,
            vec![
                DbTag { id: a, label: "Travel".into() },
                DbTag { id: b, label: "Kids".into() },
            ]
        );
    }

    #[tokio::test]
    async fn video_rows_follow_column_contract() {
        let db = Database::in_memory().await.unwrap();
        let id = db.insert_video(video("beach", 1)).await.unwrap();

        let rows = db.query_videos(1, None).await.unwrap();
        assert_eq!(rows.len(), 1);

        let item = VideoItem::from_row(&rows[0]).unwrap();
        assert_eq!(item.id, id);
        assert_eq!(item.title, "beach");
        assert_eq!(item.date, "2024-01-02");
        assert_eq!(item.description, "beach description");
        assert_eq!(item.path, "/videos/beach.mp4");
        assert_eq!(item.thumbnail, "");
    }

    #[tokio::test]
    async fn query_filters_by_tag_and_title() {
        let db = Database::in_memory().await.unwrap();
        db.insert_video(video("beach", 1)).await.unwrap();
        db.insert_video(video("mountain", 1)).await.unwrap();
        db.insert_video(video("birthday", 2)).await.unwrap();

        assert_eq!(db.query_videos(1, None).await.unwrap().len(), 2);
        assert_eq!(db.query_videos(2, None).await.unwrap().len(), 1);
        assert_eq!(db.query_videos(99, None).await.unwrap().len(), 0);
        assert_eq!(db.query_videos(1, Some("MOUNT")).await.unwrap().len(), 1);
        assert_eq!(db.query_videos(1, Some("%")).await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn import_and_delete_videos() {
        let db = Database::in_memory().await.unwrap();
        let paths = vec![PathBuf::from("/a/one.mkv"), PathBuf::from("/a/two.webm")];
        assert_eq!(db.import_videos(&paths, 4).await.unwrap(), 2);

        let rows = db.query_videos(4, None).await.unwrap();
        let first = VideoItem::from_row(&rows[0]).unwrap();
        assert_eq!(first.title, "one");

        db.update_video_title(first.id, "uno").await.unwrap();
        db.delete_video(VideoItem::from_row(&rows[1]).unwrap().id)
            .await
            .unwrap();

        let rows = db.query_videos(4, None).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(VideoItem::from_row(&rows[0]).unwrap().title, "uno");
    }
}
