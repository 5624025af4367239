//! Model over the `tags` table
//!
//! Tag labels are kept unique here rather than in the schema: an edit that
//! would duplicate another row's label never reaches the database.

use crate::database::DbTag;

/// Column holding the tag label
pub const LABEL_COLUMN: usize = 1;

/// Accepted label edit, to be written through `Database::update_tag_label`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEdit {
    pub id: i64,
    pub label: String,
}

#[derive(Debug, Clone, Default)]
pub struct TagListModel {
    tags: Vec<DbTag>,
    /// Labels handed out for inserts whose rows have not been loaded yet
    reserved: Vec<String>,
}

impl TagListModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_rows(&mut self, tags: Vec<DbTag>) {
        self.reserved
            .retain(|label| !tags.iter().any(|t| &t.label == label));
        self.tags = tags;
    }

    pub fn row_count(&self) -> usize {
        self.tags.len()
    }

    pub fn tag(&self, row: usize) -> Option<&DbTag> {
        self.tags.get(row)
    }

    pub fn tags(&self) -> &[DbTag] {
        &self.tags
    }

    pub fn find(&self, id: i64) -> Option<&DbTag> {
        self.tags.iter().find(|t| t.id == id)
    }

    /// Validate an edit of `row`
    ///
    /// Only the label column is editable. A label already used by another
    /// row is rejected without telling the user.
    pub fn set_data(&self, row: usize, column: usize, value: &str) -> Option<TagEdit> {
        if column != LABEL_COLUMN {
            tracing::debug!("Tag column {} is not editable", column);
            return None;
        }
        let tag = self.tags.get(row)?;

        let taken = self
            .tags
            .iter()
            .enumerate()
            .any(|(i, other)| i != row && other.label == value)
            || self.reserved.iter().any(|label| label == value);
        if taken {
            tracing::debug!("Rejecting duplicate tag label {:?}", value);
            return None;
        }

        Some(TagEdit {
            id: tag.id,
            label: value.to_string(),
        })
    }

    /// Reserve the first free label of the form `base`, `base 2`, `base 3`, ...
    ///
    /// The label stays taken until a reload contains it, so adds issued
    /// before the reload get distinct labels.
    pub fn reserve_label(&mut self, base: &str) -> String {
        let taken = |label: &str| {
            self.tags.iter().any(|t| t.label == label) || self.reserved.iter().any(|r| r == label)
        };
        let label = std::iter::once(base.to_string())
            .chain((2..).map(|n| format!("{} {}", base, n)))
            .find(|label| !taken(label))
            .unwrap_or_else(|| base.to_string());
        self.reserved.push(label.clone());
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;

    async fn seeded() -> (Database, TagListModel) {
        let db = Database::in_memory().await.unwrap();
        db.insert_tag("Travel").await.unwrap();
        db.insert_tag("Family").await.unwrap();
        let mut model = TagListModel::new();
        model.set_rows(db.get_all_tags().await.unwrap());
        (db, model)
    }

    #[tokio::test]
    async fn duplicate_label_leaves_table_unchanged() {
        let (db, model) = seeded().await;
        let before = db.get_all_tags().await.unwrap();

        assert_eq!(model.set_data(1, LABEL_COLUMN, "Travel"), None);
        assert_eq!(db.get_all_tags().await.unwrap(), before);
    }

    #[tokio::test]
    async fn unique_label_is_written() {
        let (db, mut model) = seeded().await;

        let edit = model.set_data(1, LABEL_COLUMN, "Kids").unwrap();
        assert_eq!(edit.id, model.tag(1).unwrap().id);
        db.update_tag_label(edit.id, &edit.label).await.unwrap();

        model.set_rows(db.get_all_tags().await.unwrap());
        let labels: Vec<_> = model.tags().iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Travel", "Kids"]);
    }

    #[tokio::test]
    async fn other_columns_and_rows_are_rejected() {
        let (_db, model) = seeded().await;
        assert_eq!(model.set_data(0, 0, "Anything"), None);
        assert_eq!(model.set_data(9, LABEL_COLUMN, "Anything"), None);
    }

    #[test]
    fn relabel_to_own_label_is_allowed() {
        let mut model = TagListModel::new();
        model.set_rows(vec![DbTag {
            id: 3,
            label: "Pets".into(),
        }]);
        assert_eq!(
            model.set_data(0, LABEL_COLUMN, "Pets"),
            Some(TagEdit {
                id: 3,
                label: "Pets".into()
            })
        );
    }

    #[test]
    fn reserved_label_counts_up() {
        let mut model = TagListModel::new();
        model.set_rows(vec![
            DbTag { id: 1, label: "New tag".into() },
            DbTag { id: 2, label: "New tag 2".into() },
        ]);
        assert_eq!(model.reserve_label("New tag"), "New tag 3");
    }

    #[tokio::test]
    async fn adds_before_reload_get_distinct_labels() {
        let db = Database::in_memory().await.unwrap();
        let mut model = TagListModel::new();

        let first = model.reserve_label("New tag");
        let second = model.reserve_label("New tag");
        assert_eq!(first, "New tag");
        assert_eq!(second, "New tag 2");

        db.insert_tag(&first).await.unwrap();
        model.set_rows(db.get_all_tags().await.unwrap());
        // Second insert still in flight
        assert_eq!(model.reserve_label("New tag"), "New tag 3");

        db.insert_tag(&second).await.unwrap();
        model.set_rows(db.get_all_tags().await.unwrap());
        let labels: Vec<_> = model.tags().iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["New tag", "New tag 2"]);
    }

    #[test]
    fn reserved_label_cannot_be_taken_by_edit() {
        let mut model = TagListModel::new();
        model.set_rows(vec![DbTag {
            id: 1,
            label: "Pets".into(),
        }]);
        let pending = model.reserve_label("New tag");
        assert_eq!(model.set_data(0, LABEL_COLUMN, &pending), None);
    }
}
