//! Playlist model
//!
//! Ordered list of media files with a current entry and a selected row.
//! Only the current entry's path is ever handed to the media backend.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub path: PathBuf,
    /// File name shown in the list and the window title
    pub name: String,
}

impl PlaylistEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = file_name(&path);
        Self { path, name }
    }
}

/// File name of `path`, falling back to the full path
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[derive(Debug, Clone, Default)]
pub struct Playlist {
    entries: Vec<PlaylistEntry>,
    current: Option<usize>,
    selected: Option<usize>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PlaylistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<&PlaylistEntry> {
        self.current.and_then(|i| self.entries.get(i))
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, row: usize) {
        if row < self.entries.len() {
            self.selected = Some(row);
        }
    }

    /// Append files; returns the index of the first appended entry
    pub fn add<I, P>(&mut self, paths: I) -> Option<usize>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let first = self.entries.len();
        self.entries.extend(paths.into_iter().map(PlaylistEntry::new));
        (self.entries.len() > first).then_some(first)
    }

    /// Remove one row, keeping current and selection pointing at the same entries
    ///
    /// Returns true if the removed row was the current entry.
    pub fn remove(&mut self, row: usize) -> bool {
        if row >= self.entries.len() {
            return false;
        }
        self.entries.remove(row);

        let was_current = self.current == Some(row);
        self.current = shift_after_remove(self.current, row);
        self.selected = match self.selected {
            // Keep a selection on the row that slid into place
            Some(s) if s == row => (row < self.entries.len())
                .then_some(row)
                .or(self.entries.len().checked_sub(1)),
            other => shift_after_remove(other, row),
        };
        was_current
    }

    /// Remove the selected row; returns true if it was the current entry
    pub fn remove_selected(&mut self) -> bool {
        match self.selected {
            Some(row) => self.remove(row),
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.current = None;
        self.selected = None;
    }

    /// Make `row` current; returns the entry to load
    pub fn set_current(&mut self, row: usize) -> Option<&PlaylistEntry> {
        if row >= self.entries.len() {
            return None;
        }
        self.current = Some(row);
        self.selected = Some(row);
        self.entries.get(row)
    }

    /// Advance to the next entry if one exists
    pub fn next(&mut self) -> Option<&PlaylistEntry> {
        let next = match self.current {
            Some(i) => i + 1,
            None => 0,
        };
        self.set_current(next)
    }

    /// Step back to the previous entry if one exists
    pub fn previous(&mut self) -> Option<&PlaylistEntry> {
        let prev = self.current?.checked_sub(1)?;
        self.set_current(prev)
    }
}

fn shift_after_remove(index: Option<usize>, removed: usize) -> Option<usize> {
    match index {
        Some(i) if i == removed => None,
        Some(i) if i > removed => Some(i - 1),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(names: &[&str]) -> Playlist {
        let mut playlist = Playlist::new();
        playlist.add(names.iter().map(|n| format!("/videos/{}", n)));
        playlist
    }

    #[test]
    fn add_appends_and_names_by_file() {
        let mut list = playlist(&["a.mp4"]);
        assert_eq!(list.add(vec!["/x/b.mkv", "/x/c.webm"]), Some(1));
        assert_eq!(list.add(Vec::<PathBuf>::new()), None);
        assert_eq!(list.len(), 3);
        assert_eq!(list.entries()[2].name, "c.webm");
        assert!(list.current().is_none());
    }

    #[test]
    fn next_and_previous_walk_the_list() {
        let mut list = playlist(&["a.mp4", "b.mp4", "c.mp4"]);
        assert_eq!(list.next().map(|e| e.name.clone()), Some("a.mp4".into()));
        assert_eq!(list.next().map(|e| e.name.clone()), Some("b.mp4".into()));
        assert_eq!(list.next().map(|e| e.name.clone()), Some("c.mp4".into()));
        assert!(list.next().is_none());
        assert_eq!(list.current_index(), Some(2));

        assert_eq!(list.previous().map(|e| e.name.clone()), Some("b.mp4".into()));
        list.previous();
        assert!(list.previous().is_none());
        assert_eq!(list.current_index(), Some(0));
    }

    #[test]
    fn remove_before_current_shifts_current() {
        let mut list = playlist(&["a.mp4", "b.mp4", "c.mp4"]);
        list.set_current(2);
        list.select(0);

        assert!(!list.remove_selected());
        assert_eq!(list.current_index(), Some(1));
        assert_eq!(list.current().map(|e| e.name.as_str()), Some("c.mp4"));
        assert_eq!(list.selected(), Some(0));
    }

    #[test]
    fn removing_current_clears_it() {
        let mut list = playlist(&["a.mp4", "b.mp4"]);
        list.set_current(1);

        assert!(list.remove_selected());
        assert_eq!(list.current_index(), None);
        assert_eq!(list.selected(), Some(0));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_without_selection_is_noop() {
        let mut list = playlist(&["a.mp4"]);
        assert!(!list.remove_selected());
        assert!(!list.remove(5));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut list = playlist(&["a.mp4", "b.mp4"]);
        list.set_current(1);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.current_index(), None);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn set_current_out_of_range() {
        let mut list = playlist(&["a.mp4"]);
        assert!(list.set_current(3).is_none());
        assert_eq!(list.current_index(), None);
    }
}
