use crate::models::Resource;

/// Component-owned copy of fetched records plus an optional selection
///
/// Nothing here is shared with other components; every view keeps its
/// own list and replaces it wholesale on each fetch.
#[derive(Debug, Clone)]
pub struct LocalList<R> {
    items: Vec<R>,
    selected: Option<String>,
}

impl<R: Resource> Default for LocalList<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> LocalList<R> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
        }
    }

    /// Replace the whole list with a fresh fetch result. A selection that
    /// no longer exists is dropped.
    pub fn replace_all(&mut self, items: Vec<R>) {
        self.items = items;
        if let Some(id) = &self.selected {
            if !self.items.iter().any(|r| r.id() == id) {
                self.selected = None;
            }
        }
    }

    pub fn append(&mut self, item: R) {
        self.items.push(item);
    }

    /// Swap in `item` for the entry sharing its id. Returns false when no
    /// entry matched.
    pub fn replace(&mut self, item: R) -> bool {
        match self.items.iter_mut().find(|r| r.id() == item.id()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Remove every entry with `id`, returning how many were removed
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|r| r.id() != id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        before - self.items.len()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|r| r.id() == id)
    }

    /// Mark the entry with `id` as selected
    pub fn select(&mut self, id: &str) -> Option<&R> {
        let found = self.items.iter().find(|r| r.id() == id)?;
        self.selected = Some(id.to_string());
        Some(found)
    }

    pub fn selected(&self) -> Option<&R> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.items.iter()
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
