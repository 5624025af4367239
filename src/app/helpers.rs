//! Async helper functions for database operations and file dialogs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::database::{Database, DbTag, VideoRows};
use crate::features::VideoQuery;
use crate::media::supported_extensions;

/// Initialize database connection
pub async fn init_database(db_path: PathBuf) -> anyhow::Result<Database> {
    tracing::info!("Initializing database at: {}", db_path.display());
    Database::new(&db_path).await
}

/// Load all tags from database
pub async fn load_tags(db: Arc<Database>) -> Vec<DbTag> {
    match db.get_all_tags().await {
        Ok(tags) => tags,
        Err(e) => {
            tracing::error!("Failed to load tags: {}", e);
            Vec::new()
        }
    }
}

/// Run a grid query; errors yield an empty result set
pub async fn load_videos(db: Arc<Database>, query: VideoQuery) -> (VideoQuery, VideoRows) {
    let rows = match db.query_videos(query.tag_id, query.search.as_deref()).await {
        Ok(rows) => VideoRows::new(rows),
        Err(e) => {
            tracing::error!("Failed to query videos for tag {}: {}", query.tag_id, e);
            VideoRows::default()
        }
    };
    (query, rows)
}

/// Ask for media files, filtered by what the active backend can play
///
/// Returns an empty list when the dialog is cancelled.
pub async fn pick_media_files(title: &'static str, filter_name: &'static str) -> Vec<PathBuf> {
    let extensions = supported_extensions();
    let files = rfd::AsyncFileDialog::new()
        .set_title(title)
        .add_filter(filter_name, extensions)
        .pick_files()
        .await;

    files
        .map(|handles| {
            handles
                .into_iter()
                .map(|h| h.path().to_path_buf())
                .collect()
        })
        .unwrap_or_default()
}

/// Keep only paths the active backend claims to support
pub fn filter_supported(paths: &[PathBuf]) -> Vec<PathBuf> {
    paths
        .iter()
        .filter(|p| is_supported(p))
        .cloned()
        .collect()
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            supported_extensions()
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_files_are_dropped() {
        let ext = supported_extensions()[0];
        let paths = vec![
            PathBuf::from(format!("/media/clip.{}", ext)),
            PathBuf::from(format!("/media/CLIP2.{}", ext.to_uppercase())),
            PathBuf::from("/media/notes.txt"),
            PathBuf::from("/media/no_extension"),
        ];
        let kept = filter_supported(&paths);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|p| p != Path::new("/media/notes.txt")));
    }

    #[tokio::test]
    async fn load_videos_echoes_query() {
        let db = Arc::new(Database::in_memory().await.unwrap());
        let query = VideoQuery {
            tag_id: 7,
            search: Some("beach".to_string()),
        };
        let (echoed, rows) = load_videos(db, query.clone()).await;
        assert_eq!(echoed, query);
        assert!(rows.is_empty());
    }
}
