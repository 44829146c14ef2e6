use std::collections::HashSet;
use std::hash::Hash;

/// Ids of the rows whose detail panel is open.
///
/// Independent of sorting and paging: an expanded row stays expanded when
/// it moves to another page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionSet<I: Eq + Hash> {
    ids: HashSet<I>,
}

impl<I: Eq + Hash> Default for ExpansionSet<I> {
    fn default() -> Self {
        Self {
            ids: HashSet::new(),
        }
    }
}

impl<I: Eq + Hash> ExpansionSet<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`; returns whether it is now expanded.
    pub fn toggle(&mut self, id: I) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn is_expanded(&self, id: &I) -> bool {
        self.ids.contains(id)
    }

    pub fn collapse_all(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
