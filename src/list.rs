//! The ordered list of input files that defines merge order.
//!
//! [`FileList`] is the single piece of state behind the joiner shell: an
//! ordered sequence of [`FileEntry`] values, where insertion order is merge
//! order. It is mutated only by the UI event handlers; the merge task gets an
//! immutable snapshot of the ordered paths via [`FileList::paths`].
//!
//! Paths are not checked for existence here. A listed file that is missing or
//! unreadable surfaces as an error at merge time, not before.

use std::path::{Path, PathBuf};

/// One input PDF: its path plus the name shown in the list.
///
/// Immutable once added. Two entries are equal when their paths are equal;
/// the display name is derived and carries no identity.
#[derive(Debug, Clone, Eq)]
pub struct FileEntry {
    /// Full path to the input file.
    pub path: PathBuf,
    /// Display name, derived from the final path segment.
    pub name: String,
}

impl FileEntry {
    /// Create an entry for the given path.
    ///
    /// The display name is the final path segment, or the whole path when it
    /// has no file name component (e.g. `..`).
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { path, name }
    }
}

impl PartialEq for FileEntry {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

/// User-ordered sequence of [`FileEntry`] defining merge order.
#[derive(Debug, Clone, Default)]
pub struct FileList {
    entries: Vec<FileEntry>,
}

impl FileList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries in the list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in merge order.
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Get the entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }

    /// Append one path to the end of the list.
    ///
    /// Duplicates are allowed; the same file listed twice is merged twice.
    pub fn add(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FileEntry::new(path.into()));
    }

    /// Append several paths, preserving their order.
    pub fn add_all<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        for path in paths {
            self.add(path);
        }
    }

    /// Remove the entries at the given indices.
    ///
    /// Out-of-range indices are ignored; the order of the surviving entries
    /// is preserved. Returns the number of entries removed.
    pub fn remove_at(&mut self, indices: &[usize]) -> usize {
        let mut sorted: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.entries.len())
            .collect();
        sorted.sort_unstable();
        sorted.dedup();

        // Remove back to front so earlier indices stay valid.
        for &index in sorted.iter().rev() {
            self.entries.remove(index);
        }
        sorted.len()
    }

    /// Empty the list unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Move the entry at `index` by `offset` positions (-1 = up, +1 = down).
    ///
    /// Returns the entry's new index, or `None` when the move was a no-op:
    /// `index` out of range, or the target position out of bounds. There is
    /// no wraparound.
    pub fn move_entry(&mut self, index: usize, offset: isize) -> Option<usize> {
        if index >= self.entries.len() {
            return None;
        }

        let target = index.checked_add_signed(offset)?;
        if target >= self.entries.len() {
            return None;
        }

        let entry = self.entries.remove(index);
        self.entries.insert(target, entry);
        Some(target)
    }

    /// Snapshot of the ordered paths, for handing to the merge task.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|e| e.path.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a FileEntry;
    type IntoIter = std::slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<PathBuf> for FileList {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        let mut list = Self::new();
        list.add_all(iter);
        list
    }
}

/// Check whether a path looks like a PDF file by extension.
pub fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(names: &[&str]) -> FileList {
        names.iter().map(PathBuf::from).collect()
    }

    fn names(list: &FileList) -> Vec<&str> {
        list.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_add_preserves_order_and_derives_names() {
        let mut list = FileList::new();
        list.add_all(["/docs/a.pdf", "/docs/b.pdf", "/other/c.pdf"]);

        assert_eq!(list.len(), 3);
        assert_eq!(names(&list), vec!["a.pdf", "b.pdf", "c.pdf"]);
        assert_eq!(list.get(2).unwrap().path, PathBuf::from("/other/c.pdf"));
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut list = FileList::new();
        list.add("/docs/a.pdf");
        list.add("/docs/a.pdf");

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0), list.get(1));
    }

    #[test]
    fn test_entry_equality_by_path() {
        let a1 = FileEntry::new(PathBuf::from("/x/a.pdf"));
        let a2 = FileEntry::new(PathBuf::from("/x/a.pdf"));
        let b = FileEntry::new(PathBuf::from("/y/a.pdf"));

        assert_eq!(a1, a2);
        assert_ne!(a1, b); // Same display name, different path
    }

    #[test]
    fn test_remove_at_preserves_survivor_order() {
        let mut list = list_of(&["a.pdf", "b.pdf", "c.pdf", "d.pdf"]);

        let removed = list.remove_at(&[3, 1]);

        assert_eq!(removed, 2);
        assert_eq!(names(&list), vec!["a.pdf", "c.pdf"]);
    }

    #[test]
    fn test_remove_at_ignores_out_of_range_and_duplicates() {
        let mut list = list_of(&["a.pdf", "b.pdf"]);

        let removed = list.remove_at(&[1, 1, 99]);

        assert_eq!(removed, 1);
        assert_eq!(names(&list), vec!["a.pdf"]);
    }

    #[test]
    fn test_remove_at_empty_selection_is_noop() {
        let mut list = list_of(&["a.pdf"]);
        assert_eq!(list.remove_at(&[]), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut list = list_of(&["a.pdf", "b.pdf"]);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_move_up_on_first_is_noop() {
        let mut list = list_of(&["a.pdf", "b.pdf"]);
        assert_eq!(list.move_entry(0, -1), None);
        assert_eq!(names(&list), vec!["a.pdf", "b.pdf"]);
    }

    #[test]
    fn test_move_down_on_last_is_noop() {
        let mut list = list_of(&["a.pdf", "b.pdf"]);
        assert_eq!(list.move_entry(1, 1), None);
        assert_eq!(names(&list), vec!["a.pdf", "b.pdf"]);
    }

    #[test]
    fn test_move_swaps_with_neighbor() {
        let mut list = list_of(&["a.pdf", "b.pdf", "c.pdf"]);

        assert_eq!(list.move_entry(2, -1), Some(1));
        assert_eq!(names(&list), vec!["a.pdf", "c.pdf", "b.pdf"]);

        assert_eq!(list.move_entry(1, 1), Some(2));
        assert_eq!(names(&list), vec!["a.pdf", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn test_move_on_empty_list_is_noop() {
        let mut list = FileList::new();
        assert_eq!(list.move_entry(0, -1), None);
        assert_eq!(list.move_entry(0, 1), None);
    }

    #[test]
    fn test_paths_snapshot_matches_order() {
        let mut list = list_of(&["a.pdf", "b.pdf", "c.pdf"]);
        list.move_entry(2, -1);

        let paths = list.paths();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("a.pdf"),
                PathBuf::from("c.pdf"),
                PathBuf::from("b.pdf"),
            ]
        );
    }

    #[test]
    fn test_is_pdf_path() {
        assert!(is_pdf_path(Path::new("a.pdf")));
        assert!(is_pdf_path(Path::new("A.PDF")));
        assert!(!is_pdf_path(Path::new("a.txt")));
        assert!(!is_pdf_path(Path::new("pdf")));
    }
}
