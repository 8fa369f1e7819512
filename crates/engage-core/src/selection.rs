//! Tracks which list rows are checked for bulk actions.
//!
//! The selection is ephemeral client-side state. It must always be
//! intersected with the surviving collection after a refetch or delete so a
//! stale id never inflates the "N selected" count.

use std::collections::HashSet;
use std::hash::Hash;

/// A set of selected item identifiers.
#[derive(Debug, Clone, Default)]
pub struct Selection<Id> {
    selected: HashSet<Id>,
}

impl<Id: Eq + Hash + Clone> Selection<Id> {
    #[must_use]
    pub fn new() -> Self {
        Selection {
            selected: HashSet::new(),
        }
    }

    /// Replaces the selection with exactly `visible` when checked, or clears
    /// it when unchecked.
    ///
    /// Callers must pass the *currently filtered* ids, not the full
    /// collection — selecting "all" while a filter is active must not
    /// silently select hidden rows.
    pub fn select_all<I>(&mut self, checked: bool, visible: I)
    where
        I: IntoIterator<Item = Id>,
    {
        self.selected.clear();
        if checked {
            self.selected.extend(visible);
        }
    }

    /// Toggles membership of a single id.
    pub fn toggle(&mut self, id: Id) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    #[must_use]
    pub fn is_selected(&self, id: &Id) -> bool {
        self.selected.contains(id)
    }

    /// True iff `visible` is non-empty and every visible id is selected.
    pub fn is_all_selected<'a, I>(&self, visible: I) -> bool
    where
        Id: 'a,
        I: IntoIterator<Item = &'a Id>,
    {
        let mut any = false;
        for id in visible {
            if !self.selected.contains(id) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Drops every selected id for which `keep` returns false.
    ///
    /// Run this with "id is still in the collection" after any refetch or
    /// delete.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&Id) -> bool,
    {
        self.selected.retain(keep);
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The selected ids in arbitrary order (bulk request bodies are
    /// order-insensitive).
    #[must_use]
    pub fn ids(&self) -> Vec<Id> {
        self.selected.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all_replaces_with_visible_ids_only() {
        let mut selection: Selection<u32> = Selection::new();
        selection.toggle(99);
        // Full collection has 10 rows, filter narrowed to 3.
        selection.select_all(true, [1, 2, 3]);
        assert_eq!(selection.len(), 3);
        assert!(selection.is_selected(&1));
        assert!(!selection.is_selected(&99));
    }

    #[test]
    fn select_all_unchecked_clears() {
        let mut selection: Selection<u32> = Selection::new();
        selection.select_all(true, [1, 2]);
        selection.select_all(false, [1, 2]);
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_flips_membership() {
        let mut selection: Selection<&str> = Selection::new();
        selection.toggle("a");
        assert!(selection.is_selected(&"a"));
        selection.toggle("a");
        assert!(!selection.is_selected(&"a"));
    }

    #[test]
    fn is_all_selected_requires_nonempty_view() {
        let selection: Selection<u32> = Selection::new();
        assert!(!selection.is_all_selected(std::iter::empty::<&u32>()));

        let mut selection: Selection<u32> = Selection::new();
        selection.select_all(true, [2]);
        assert!(selection.is_all_selected([&2]));
        // Clearing the filter widens the view; id 1 is unselected.
        assert!(!selection.is_all_selected([&1, &2]));
    }

    #[test]
    fn retain_intersects_with_survivors() {
        let mut selection: Selection<&str> = Selection::new();
        selection.select_all(true, ["a", "b"]);
        let survivors: HashSet<&str> = ["a", "c"].into_iter().collect();
        selection.retain(|id| survivors.contains(id));
        assert_eq!(selection.len(), 1);
        assert!(selection.is_selected(&"a"));
        assert!(!selection.is_selected(&"b"));
    }

    #[test]
    fn selection_unchanged_when_all_ids_survive() {
        let mut selection: Selection<&str> = Selection::new();
        selection.select_all(true, ["a", "b"]);
        let survivors: HashSet<&str> = ["a", "b", "c"].into_iter().collect();
        selection.retain(|id| survivors.contains(id));
        assert_eq!(selection.len(), 2);
    }
}
