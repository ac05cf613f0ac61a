//! Disclosure - Open/Selected Index Tracking
//!
//! Backs the Accordion (set of opened panels) and the Tabs and Stepper
//! components (one selected index).

use std::collections::BTreeSet;

/// Opened panels of an accordion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Disclosure {
    multiple: bool,
    opened: BTreeSet<usize>,
}

impl Disclosure {
    /// Create with every panel closed
    pub fn new(multiple: bool) -> Self {
        Self {
            multiple,
            opened: BTreeSet::new(),
        }
    }

    /// Check if a panel is open
    pub fn is_open(&self, index: usize) -> bool {
        self.opened.contains(&index)
    }

    /// Opened panels in ascending order
    pub fn opened(&self) -> impl Iterator<Item = usize> + '_ {
        self.opened.iter().copied()
    }

    /// Toggle a panel; returns whether it is open afterwards.
    ///
    /// In single mode opening a panel closes every other one.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.opened.remove(&index) {
            return false;
        }
        if !self.multiple {
            self.opened.clear();
        }
        self.opened.insert(index);
        true
    }

    /// Close every panel
    pub fn collapse_all(&mut self) {
        self.opened.clear();
    }
}

/// One selected index out of `len`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    len: usize,
    active: usize,
}

impl Selection {
    /// Create a selection, clamping `active` into range
    pub fn new(len: usize, active: usize) -> Self {
        Self {
            len,
            active: active.min(len.saturating_sub(1)),
        }
    }

    /// Get the selected index
    pub fn active(&self) -> usize {
        self.active
    }

    /// Number of selectable items
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if there is nothing to select
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Select `index`; returns it when it is in range
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.active = index;
        Some(index)
    }

    /// Select the next item, staying on the last one
    pub fn next(&mut self) -> Option<usize> {
        self.select((self.active + 1).min(self.len.saturating_sub(1)))
    }

    /// Select the previous item, staying on the first one
    pub fn previous(&mut self) -> Option<usize> {
        self.select(self.active.saturating_sub(1))
    }

    /// Whether `index` comes before the selected one (a completed step)
    pub fn is_before(&self, index: usize) -> bool {
        index < self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_mode_keeps_one_panel_open() {
        let mut disclosure = Disclosure::new(false);
        assert!(disclosure.toggle(0));
        assert!(disclosure.toggle(2));
        assert_eq!(disclosure.opened().collect::<Vec<_>>(), vec![2]);
        assert!(!disclosure.toggle(2));
        assert_eq!(disclosure.opened().count(), 0);
    }

    #[test]
    fn multiple_mode_toggles_independently() {
        let mut disclosure = Disclosure::new(true);
        disclosure.toggle(3);
        disclosure.toggle(1);
        assert_eq!(disclosure.opened().collect::<Vec<_>>(), vec![1, 3]);
        disclosure.toggle(3);
        assert!(disclosure.is_open(1));
        assert!(!disclosure.is_open(3));
        disclosure.collapse_all();
        assert_eq!(disclosure.opened().count(), 0);
    }

    #[test]
    fn selection_clamps_and_navigates() {
        let mut selection = Selection::new(3, 7);
        assert_eq!(selection.active(), 2);
        assert_eq!(selection.select(5), None);
        assert_eq!(selection.previous(), Some(1));
        assert_eq!(selection.next(), Some(2));
        assert_eq!(selection.next(), Some(2));
        assert!(selection.is_before(1));
        assert!(!selection.is_before(2));
    }

    #[test]
    fn empty_selection_rejects_everything() {
        let mut selection = Selection::new(0, 0);
        assert!(selection.is_empty());
        assert_eq!(selection.next(), None);
        assert_eq!(selection.previous(), None);
    }
}
