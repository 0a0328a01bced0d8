//! Column header bookkeeping for a single table
//!
//! Header cells are grouped by their class list (the "row name"). A header
//! cell covering one column becomes a *key* for that column; a header cell
//! spanning several columns becomes a *header* attached to each of them.
//! `<colgroup>`/`<col>` classes are tracked per column as well.

use indexmap::IndexMap;

/// Accumulates key/header/colgroup associations while one table is scanned.
///
/// A tracker belongs to exactly one table; build a fresh one per table.
#[derive(Debug, Clone, Default)]
pub struct HeaderTracker {
    keys: IndexMap<String, IndexMap<usize, String>>,
    headers: IndexMap<String, IndexMap<usize, String>>,
    colgroups: IndexMap<usize, Vec<String>>,
}

impl HeaderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_colgroup(&mut self, offset: usize, span: usize, text: &str) {
        for index in offset..offset.saturating_add(span) {
            self.colgroups
                .entry(index)
                .or_default()
                .push(text.to_string());
        }
    }

    /// Record a single-column header cell. Empty text falls back to the index.
    pub fn set_key(&mut self, row_name: &str, index: usize, text: &str) {
        let key = if text.is_empty() {
            index.to_string()
        } else {
            text.to_string()
        };
        log::trace!("key[{:?}][{}] = {:?}", row_name, index, key);
        self.keys
            .entry(row_name.to_string())
            .or_default()
            .insert(index, key);
    }

    /// Record a header cell spanning `span` columns starting at `offset`
    pub fn set_header(&mut self, row_name: &str, offset: usize, span: usize, text: &str) {
        log::trace!(
            "header[{:?}][{}..{}] = {:?}",
            row_name,
            offset,
            offset.saturating_add(span),
            text
        );
        let row = self.headers.entry(row_name.to_string()).or_default();
        for index in offset..offset.saturating_add(span) {
            row.insert(index, text.to_string());
        }
    }

    /// First key recorded for the column (row names in insertion order),
    /// or the column index itself.
    pub fn get_key(&self, index: usize) -> String {
        self.keys
            .values()
            .find_map(|row| row.get(&index).cloned())
            .unwrap_or_else(|| index.to_string())
    }

    /// Every global header covering the column, one per row name
    pub fn get_headers(&self, index: usize) -> Vec<String> {
        self.headers
            .values()
            .filter_map(|row| row.get(&index).cloned())
            .collect()
    }

    pub fn get_colgroups(&self, index: usize) -> Vec<String> {
        self.colgroups.get(&index).cloned().unwrap_or_default()
    }

    /// Whether any single-column key has been recorded yet
    pub fn has_keys(&self) -> bool {
        !self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_fallbacks() {
        let mut tracker = HeaderTracker::new();
        assert!(!tracker.has_keys());
        assert_eq!(tracker.get_key(3), "3");

        tracker.set_key("", 0, "Last name");
        tracker.set_key("", 1, "");
        assert!(tracker.has_keys());
        assert_eq!(tracker.get_key(0), "Last name");
        assert_eq!(tracker.get_key(1), "1");
        assert_eq!(tracker.get_key(2), "2");
    }

    #[test]
    fn test_first_row_name_wins_for_keys() {
        let mut tracker = HeaderTracker::new();
        tracker.set_key("primary", 0, "Name");
        tracker.set_key("secondary", 0, "Alias");
        tracker.set_key("secondary", 1, "Age");

        assert_eq!(tracker.get_key(0), "Name");
        assert_eq!(tracker.get_key(1), "Age");
    }

    #[test]
    fn test_headers_concatenate_across_row_names() {
        let mut tracker = HeaderTracker::new();
        tracker.set_header("top", 0, 4, "People");
        tracker.set_header("sub", 0, 2, "Name");
        tracker.set_header("sub", 2, 2, "Contact");

        assert_eq!(tracker.get_headers(1), vec!["People", "Name"]);
        assert_eq!(tracker.get_headers(3), vec!["People", "Contact"]);
        assert!(tracker.get_headers(4).is_empty());
        // headers never create keys
        assert!(!tracker.has_keys());
    }

    #[test]
    fn test_colgroups() {
        let mut tracker = HeaderTracker::new();
        tracker.add_colgroup(0, 2, "names");
        tracker.add_colgroup(1, 1, "highlight");

        assert_eq!(tracker.get_colgroups(0), vec!["names"]);
        assert_eq!(tracker.get_colgroups(1), vec!["names", "highlight"]);
        assert!(tracker.get_colgroups(2).is_empty());
    }
}
