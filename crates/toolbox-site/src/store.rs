//! Item store with identifier lookups.
//!
//! # Architecture
//!
//! Items are stored in a flat `Vec<Item>` with children tracked by indices.
//! This provides:
//! - O(1) identifier lookups via `identifier_index` `HashMap`
//! - children in insertion order
//!
//! Parents are derived from identifiers at build time: an item's parent is
//! the item whose identifier is one segment shorter. Items whose direct
//! parent is missing are not reachable as anyone's child. Since a parent
//! identifier is always a strict prefix, the hierarchy cannot contain cycles.

use std::collections::HashMap;

use crate::identifier::{normalize_identifier, parent_identifier};
use crate::item::Item;
use crate::util::relative_path;

/// Immutable store of site items.
pub struct ItemStore {
    items: Vec<Item>,
    children: Vec<Vec<usize>>,
    identifier_index: HashMap<String, usize>,
}

impl ItemStore {
    /// Find an item by identifier. The identifier is normalized first.
    #[must_use]
    pub fn find(&self, identifier: &str) -> Option<&Item> {
        self.index_of(identifier).map(|i| &self.items[i])
    }

    /// Children of an item in insertion order.
    ///
    /// Returns an empty vector for items that are not part of this store.
    #[must_use]
    pub fn children(&self, item: &Item) -> Vec<&Item> {
        self.index_of(item.identifier())
            .map(|idx| self.children[idx].iter().map(|&j| &self.items[j]).collect())
            .unwrap_or_default()
    }

    /// Link from one item to another.
    ///
    /// With a `from` item the link is relative to its output path,
    /// otherwise the target's output path is returned as is.
    #[must_use]
    pub fn link_to(&self, from: Option<&Item>, to: &Item) -> String {
        match from {
            Some(from) => relative_path(from.path(), to.path()),
            None => to.path().to_owned(),
        }
    }

    fn index_of(&self, identifier: &str) -> Option<usize> {
        self.identifier_index
            .get(identifier)
            .or_else(|| self.identifier_index.get(&normalize_identifier(identifier)))
            .copied()
    }
}

/// Builder for constructing [`ItemStore`] instances.
#[derive(Default)]
pub struct ItemStoreBuilder {
    items: Vec<Item>,
    identifier_index: HashMap<String, usize>,
}

impl ItemStoreBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the store.
    ///
    /// Returns the index of the item, or `None` if an item with the same
    /// identifier was already added (the first one wins).
    pub fn add_item(&mut self, item: Item) -> Option<usize> {
        if self.identifier_index.contains_key(item.identifier()) {
            tracing::warn!(identifier = %item.identifier(), "Duplicate item identifier ignored");
            return None;
        }

        let idx = self.items.len();
        self.identifier_index
            .insert(item.identifier().to_owned(), idx);
        self.items.push(item);
        Some(idx)
    }

    /// Build the [`ItemStore`], linking each item to its parent.
    #[must_use]
    pub fn build(self) -> ItemStore {
        let mut children = vec![Vec::new(); self.items.len()];
        let mut orphan_count = 0;

        for (idx, item) in self.items.iter().enumerate() {
            let parent = parent_identifier(item.identifier())
                .and_then(|id| self.identifier_index.get(&id).copied());
            match parent {
                Some(p) => children[p].push(idx),
                None => orphan_count += 1,
            }
        }

        tracing::debug!(item_count = self.items.len(), orphan_count, "Item store built");

        ItemStore {
            items: self.items,
            children,
            identifier_index: self.identifier_index,
        }
    }
}
