//! Bounded most-recently-used list backing the dock's recent section.

#[derive(Debug, Clone, PartialEq, Eq)]
/// Most-recent-first list with no duplicates and at most `capacity` entries.
pub struct RecentList<T> {
    entries: Vec<T>,
    capacity: usize,
}

impl<T: PartialEq> RecentList<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Moves `item` to the front, evicting the oldest entry past capacity.
    pub fn push(&mut self, item: T) {
        self.remove(&item);
        self.entries.insert(0, item);
        self.entries.truncate(self.capacity);
    }

    pub fn remove(&mut self, item: &T) {
        self.entries.retain(|entry| entry != item);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, item: &T) -> bool {
        self.entries.contains(item)
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn push_moves_existing_entry_to_front_without_duplicates() {
        let mut recent = RecentList::new(2);
        recent.push("a");
        recent.push("b");
        recent.push("a");
        assert_eq!(recent.entries(), &["a", "b"]);
    }

    #[test]
    fn push_evicts_oldest_past_capacity() {
        let mut recent = RecentList::new(2);
        recent.push("a");
        recent.push("b");
        recent.push("c");
        assert_eq!(recent.entries(), &["c", "b"]);
        assert!(!recent.contains(&"a"));
    }

    #[test]
    fn remove_and_clear() {
        let mut recent = RecentList::new(3);
        recent.push(1);
        recent.push(2);
        recent.remove(&1);
        recent.remove(&7);
        assert_eq!(recent.entries(), &[2]);
        recent.clear();
        assert!(recent.is_empty());
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut recent = RecentList::new(0);
        recent.push("a");
        assert_eq!(recent.len(), 0);
    }
}
