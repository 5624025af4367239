//! Query-backed model over the `videos` table
//!
//! Holds the raw result set of the current query and turns rows into
//! `VideoItem`s only when something asks for them. Built items are memoized
//! per row; the memo is dropped wholesale whenever the rows may have moved.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::database::{VideoItem, VideoRows};

/// Query the grid wants run against the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoQuery {
    pub tag_id: i64,
    /// Case-insensitive title substring, `None` for no narrowing
    pub search: Option<String>,
}

#[derive(Debug, Default)]
pub struct VideoGridModel {
    tag_id: i64,
    search: Option<String>,
    rows: VideoRows,
    // Filled lazily from `data`, which only has `&self` during view
    cache: RefCell<HashMap<usize, VideoItem>>,
}

impl VideoGridModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag_id(&self) -> i64 {
        self.tag_id
    }

    /// Switch to another tag; returns the query to run
    pub fn set_tag_id(&mut self, id: i64) -> VideoQuery {
        self.tag_id = id;
        tracing::debug!("Setting tag id to {}", id);
        self.refresh()
    }

    /// Narrow by title; empty or blank text removes the narrowing
    pub fn set_search(&mut self, text: &str) -> VideoQuery {
        let text = text.trim();
        self.search = (!text.is_empty()).then(|| text.to_string());
        self.refresh()
    }

    /// The query describing the current tag and search
    pub fn refresh(&self) -> VideoQuery {
        VideoQuery {
            tag_id: self.tag_id,
            search: self.search.clone(),
        }
    }

    /// Install a result set
    ///
    /// Results for a query that is no longer current are dropped; returns
    /// whether the rows were taken.
    pub fn set_rows(&mut self, query: &VideoQuery, rows: VideoRows) -> bool {
        if *query != self.refresh() {
            tracing::debug!(
                "Dropping stale video rows for tag {} (current {})",
                query.tag_id,
                self.tag_id
            );
            return false;
        }
        self.rows = rows;
        self.cache.get_mut().clear();
        true
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Display item for `row`, built on first access
    pub fn data(&self, row: usize) -> Option<VideoItem> {
        if let Some(item) = self.cache.borrow().get(&row) {
            return Some(item.clone());
        }

        let raw = self.rows.get(row)?;
        match VideoItem::from_row(raw) {
            Ok(item) => {
                self.cache.borrow_mut().insert(row, item.clone());
                Some(item)
            }
            Err(e) => {
                tracing::warn!("Malformed video row {}: {}", row, e);
                None
            }
        }
    }

    pub fn is_cached(&self, row: usize) -> bool {
        self.cache.borrow().contains_key(&row)
    }

    // ============ Change notifications ============

    pub fn rows_inserted(&mut self, start: usize, end: usize) {
        tracing::debug!("Video rows {}..={} inserted", start, end);
        self.cache.get_mut().clear();
    }

    pub fn rows_removed(&mut self, start: usize, end: usize) {
        tracing::debug!("Video rows {}..={} removed", start, end);
        self.cache.get_mut().clear();
    }

    pub fn rows_changed(&mut self, start: usize, end: usize) {
        tracing::debug!("Video rows {}..={} changed", start, end);
        self.cache.get_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{Database, NewVideo};

    fn video(title: &str, tag_id: i64) -> NewVideo {
        NewVideo {
            title: title.to_string(),
            date: "2024-03-01".to_string(),
            description: String::new(),
            path: format!("/videos/{}.mp4", title),
            thumbnail: String::new(),
            tag_id,
        }
    }

    async fn run(db: &Database, query: &VideoQuery) -> VideoRows {
        VideoRows::new(
            db.query_videos(query.tag_id, query.search.as_deref())
                .await
                .unwrap(),
        )
    }

    fn titles(grid: &VideoGridModel) -> Vec<String> {
        (0..grid.row_count())
            .filter_map(|row| grid.data(row))
            .map(|item| item.title)
            .collect()
    }

    #[tokio::test]
    async fn grid_shows_only_rows_of_active_tag() {
        let db = Database::in_memory().await.unwrap();
        db.insert_video(video("beach", 1)).await.unwrap();
        db.insert_video(video("forest", 2)).await.unwrap();
        db.insert_video(video("river", 2)).await.unwrap();

        let mut grid = VideoGridModel::new();
        let query = grid.set_tag_id(1);
        assert!(grid.set_rows(&query, run(&db, &query).await));
        assert_eq!(titles(&grid), vec!["beach"]);

        let query = grid.set_tag_id(2);
        assert!(grid.set_rows(&query, run(&db, &query).await));
        assert_eq!(grid.tag_id(), 2);
        assert_eq!(titles(&grid), vec!["forest", "river"]);

        let query = grid.set_tag_id(42);
        assert!(grid.set_rows(&query, run(&db, &query).await));
        assert_eq!(grid.row_count(), 0);
        assert!(grid.data(0).is_none());
    }

    #[tokio::test]
    async fn stale_results_are_dropped() {
        let db = Database::in_memory().await.unwrap();
        db.insert_video(video("beach", 1)).await.unwrap();

        let mut grid = VideoGridModel::new();
        let old = grid.set_tag_id(1);
        let rows = run(&db, &old).await;
        grid.set_tag_id(2);

        assert!(!grid.set_rows(&old, rows));
        assert_eq!(grid.row_count(), 0);
    }

    #[tokio::test]
    async fn search_narrows_by_title() {
        let db = Database::in_memory().await.unwrap();
        db.insert_video(video("Summer beach", 1)).await.unwrap();
        db.insert_video(video("Winter hike", 1)).await.unwrap();

        let mut grid = VideoGridModel::new();
        grid.set_tag_id(1);
        let query = grid.set_search("  BEACH ");
        assert_eq!(query.search.as_deref(), Some("BEACH"));
        grid.set_rows(&query, run(&db, &query).await);
        assert_eq!(titles(&grid), vec!["Summer beach"]);

        let query = grid.set_search("");
        assert_eq!(query.search, None);
        grid.set_rows(&query, run(&db, &query).await);
        assert_eq!(grid.row_count(), 2);
    }

    #[tokio::test]
    async fn items_are_memoized_until_notified() {
        let db = Database::in_memory().await.unwrap();
        let id = db.insert_video(video("beach", 1)).await.unwrap();
        db.insert_video(video("cliff", 1)).await.unwrap();

        let mut grid = VideoGridModel::new();
        let query = grid.set_tag_id(1);
        grid.set_rows(&query, run(&db, &query).await);

        assert!(!grid.is_cached(0));
        let first = grid.data(0).unwrap();
        assert_eq!(first.id, id);
        assert!(grid.is_cached(0));
        assert!(!grid.is_cached(1));

        grid.rows_changed(0, 0);
        assert!(!grid.is_cached(0));
        assert_eq!(grid.data(0), Some(first.clone()));

        grid.rows_inserted(2, 2);
        assert!(!grid.is_cached(0));
        grid.data(0);
        grid.rows_removed(1, 1);
        assert!(!grid.is_cached(0));
    }

    #[tokio::test]
    async fn changed_rows_are_recomputed_from_new_results() {
        let db = Database::in_memory().await.unwrap();
        let id = db.insert_video(video("beach", 1)).await.unwrap();

        let mut grid = VideoGridModel::new();
        let query = grid.set_tag_id(1);
        grid.set_rows(&query, run(&db, &query).await);
        assert_eq!(grid.data(0).map(|v| v.title), Some("beach".into()));

        db.update_video_title(id, "sunset").await.unwrap();
        grid.rows_changed(0, 0);
        let query = grid.refresh();
        grid.set_rows(&query, run(&db, &query).await);
        assert_eq!(grid.data(0).map(|v| v.title), Some("sunset".into()));

        db.insert_video(video("dunes", 1)).await.unwrap();
        grid.rows_inserted(1, 1);
        let query = grid.refresh();
        grid.set_rows(&query, run(&db, &query).await);
        assert_eq!(titles(&grid), vec!["sunset", "dunes"]);

        db.delete_video(id).await.unwrap();
        grid.rows_removed(0, 0);
        let query = grid.refresh();
        grid.set_rows(&query, run(&db, &query).await);
        assert_eq!(titles(&grid), vec!["dunes"]);
    }
}
