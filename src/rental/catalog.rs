//! Catalog of rentable items.
//!
//! Owns every item ever added plus a view of the ones currently checked
//! out. The view stores handles into the owned list, never copies.

use tracing::debug;

use super::item::{Item, ItemState};
use crate::error::{Action, ShelfError};

/// Handle to an item owned by a [`Catalog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// All items in the store and the subset currently rented
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    checked_out: Vec<ItemId>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. Duplicate titles are kept as separate copies.
    pub fn add(&mut self, item: Item) -> ItemId {
        let id = ItemId(self.items.len());
        debug!(id = %id, title = item.title(), "Item added to catalog");
        self.items.push(item);
        id
    }

    /// Get an item by handle
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0)
    }

    /// First item with exactly this title, in insertion order
    pub fn find_by_title(&self, title: &str) -> Option<ItemId> {
        self.items
            .iter()
            .position(|item| item.title() == title)
            .map(ItemId)
    }

    /// First checked-out item with exactly this title, in checkout order
    pub fn find_checked_out(&self, title: &str) -> Option<ItemId> {
        self.checked_out
            .iter()
            .copied()
            .find(|id| self.items[id.0].title() == title)
    }

    /// Check out an available item
    pub fn checkout(&mut self, id: ItemId) -> Result<&Item, ShelfError> {
        let item = self
            .items
            .get_mut(id.0)
            .ok_or_else(|| ShelfError::not_found(format!("item {}", id)))?;

        if !item.take() {
            let err = ShelfError::InvalidTransition {
                title: item.title().to_string(),
                state: ItemState::CheckedOut,
                action: Action::Checkout,
            };
            debug!(error = %err, "Transition rejected");
            return Err(err);
        }

        debug!(id = %id, title = item.title(), "Item rented");
        self.checked_out.push(id);
        Ok(&self.items[id.0])
    }

    /// Return a checked-out item
    pub fn return_item(&mut self, id: ItemId) -> Result<&Item, ShelfError> {
        let title = self
            .items
            .get(id.0)
            .map(|item| item.title().to_string())
            .ok_or_else(|| ShelfError::not_found(format!("item {}", id)))?;

        let Some(pos) = self.checked_out.iter().position(|c| *c == id) else {
            let err = ShelfError::InvalidTransition {
                title,
                state: ItemState::Available,
                action: Action::Return,
            };
            debug!(error = %err, "Transition rejected");
            return Err(err);
        };

        self.checked_out.remove(pos);
        let item = &mut self.items[id.0];
        item.restore();
        debug!(id = %id, title = item.title(), "Item returned");
        Ok(item)
    }

    /// Every item, in insertion order
    pub fn list_all(&self) -> &[Item] {
        &self.items
    }

    /// Checked-out items, in checkout order
    pub fn list_checked_out(&self) -> Vec<&Item> {
        self.checked_out.iter().map(|id| &self.items[id.0]).collect()
    }

    /// Iterate over (handle, item) pairs
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items.iter().enumerate().map(|(i, item)| (ItemId(i), item))
    }

    /// True when availability flags agree with the checked-out view
    pub fn check_invariants(&self) -> bool {
        self.iter().all(|(id, item)| {
            let in_view = self.checked_out.iter().filter(|c| **c == id).count();
            match in_view {
                0 => item.is_available(),
                1 => !item.is_available(),
                _ => false,
            }
        })
    }

    /// Get the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl std::fmt::Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self.items.iter().map(|item| item.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
