//! Database models for persistent storage
//! These models map directly to SQLite tables

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// Tag stored in database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct DbTag {
    /// Unique identifier (auto-increment)
    pub id: i64,
    /// User-visible label, unique across rows (enforced by `TagListModel`)
    pub label: String,
}

/// Display item for one `videos` row
///
/// Built from fixed column positions of a `SELECT * FROM videos` row, so the
/// column order of the `videos` table is part of this type's contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoItem {
    pub id: i64,
    /// File path on disk
    pub path: String,
    pub title: String,
    /// Date added, `YYYY-MM-DD`
    pub date: String,
    pub description: String,
    /// Thumbnail image path, empty when none
    pub thumbnail: String,
}

impl VideoItem {
    pub const COL_ID: usize = 0;
    pub const COL_TITLE: usize = 1;
    pub const COL_DATE: usize = 2;
    pub const COL_DESCRIPTION: usize = 3;
    pub const COL_PATH: usize = 4;
    pub const COL_THUMBNAIL: usize = 5;

    /// Read a video item out of a raw `videos` row
    pub fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get(Self::COL_ID)?,
            path: row.try_get(Self::COL_PATH)?,
            title: row.try_get(Self::COL_TITLE)?,
            date: row.try_get(Self::COL_DATE)?,
            description: row.try_get(Self::COL_DESCRIPTION)?,
            thumbnail: row.try_get(Self::COL_THUMBNAIL)?,
        })
    }
}

/// Raw `videos` result set
///
/// Rows stay as returned by SQLite until the grid asks for them.
#[derive(Clone, Default)]
pub struct VideoRows(Arc<Vec<SqliteRow>>);

impl VideoRows {
    pub fn new(rows: Vec<SqliteRow>) -> Self {
        Self(Arc::new(rows))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&SqliteRow> {
        self.0.get(row)
    }
}

impl std::fmt::Debug for VideoRows {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("VideoRows").field(&self.0.len()).finish()
    }
}

// ============ Input structs for creating new records ============

/// Input for creating a new video
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub title: String,
    pub date: String,
    pub description: String,
    pub path: String,
    pub thumbnail: String,
    pub tag_id: i64,
}

impl NewVideo {
    /// Build a library entry for a file, titled after its file stem
    pub fn from_path(path: &std::path::Path, tag_id: i64, date: String) -> Self {
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Self {
            title,
            date,
            description: String::new(),
            path: path.display().to_string(),
            thumbnail: String::new(),
            tag_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn new_video_title_is_file_stem() {
        let video = NewVideo::from_path(Path::new("/media/clips/holiday.mp4"), 3, "2024-05-01".into());
        assert_eq!(video.title, "holiday");
        assert_eq!(video.path, "/media/clips/holiday.mp4");
        assert_eq!(video.tag_id, 3);
        assert!(video.description.is_empty());
    }

    #[test]
    fn empty_rows_debug() {
        let rows = VideoRows::default();
        assert!(rows.is_empty());
        assert_eq!(format!("{:?}", rows), "VideoRows(0)");
    }
}
