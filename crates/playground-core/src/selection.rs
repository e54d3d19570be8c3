//! Ingredient Selection
//!
//! The set of items the user has declared available. Membership is what
//! matching looks at; insertion order only drives the order of the
//! "remove" badges in the tray.

use crate::model::ItemId;

#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: Vec<ItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present.
    ///
    /// Returns whether the item is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in the order they were added
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Same members, regardless of the order they were added in
    pub fn same_members(&self, other: &Selection) -> bool {
        self.len() == other.len() && self.iter().all(|id| other.contains(id))
    }
}

/// Set equality: pick order is ignored
impl PartialEq for Selection {
    fn eq(&self, other: &Self) -> bool {
        self.same_members(other)
    }
}

impl Eq for Selection {}

impl<S: Into<ItemId>> FromIterator<S> for Selection {
    /// Builds a selection, ignoring repeated ids
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for id in iter {
            let id = id.into();
            if !selection.contains(&id) {
                selection.ids.push(id);
            }
        }
        selection
    }
}
