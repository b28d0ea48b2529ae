use shared::domain::ItemId;
use tracing::debug;

use crate::error::PageError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub id: ItemId,
    pub text: String,
}

/// A list whose entries each carry their own delete action.
#[derive(Debug, Default)]
pub struct DynamicList {
    items: Vec<ListItem>,
    next_id: u64,
}

impl DynamicList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the trimmed input and clears it. Blank input is ignored and
    /// left untouched.
    pub fn add(&mut self, input: &mut String) -> Option<ItemId> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        self.next_id += 1;
        let id = ItemId(self.next_id);
        self.items.push(ListItem {
            id,
            text: text.to_string(),
        });
        input.clear();
        debug!(%id, "list item added");
        Some(id)
    }

    pub fn remove(&mut self, id: ItemId) -> Result<ListItem, PageError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(PageError::UnknownItem(id))?;
        debug!(%id, "list item removed");
        Ok(self.items.remove(index))
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/list_tests.rs"]
mod tests;
