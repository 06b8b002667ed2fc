//! Open-item bookkeeping: the ordered set of expanded ids, the initial
//! collapse map, and the toggle rule.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::item::{ItemId, ItemList};

/// Ordered ids of the items that are currently expanded.
///
/// Membership is checked by inclusion, so an id that matches no rendered
/// item is carried along harmlessly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OpenSet {
    ids: Vec<ItemId>,
}

impl OpenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|open| open.as_str() == id)
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Toggle `id`.
    ///
    /// An open id is removed and the others keep their order. A closed id is
    /// appended when several items may be open, otherwise it replaces
    /// whatever was open so at most one id remains.
    pub fn toggle(&mut self, id: &str, allow_multiple_open: bool) {
        if self.contains(id) {
            self.ids.retain(|open| open.as_str() != id);
        } else if allow_multiple_open {
            self.ids.push(ItemId::from(id));
        } else {
            self.ids = vec![ItemId::from(id)];
        }
    }

    /// Describe this set as a collapse map over `items`: every listed item
    /// that is not open is marked collapsed.
    ///
    /// Feeding the result back through [`initial_open_set`] yields the open
    /// items in list order.
    pub fn to_collapse_map(&self, items: &ItemList) -> CollapseMap {
        items
            .ids()
            .map(|id| (id.clone(), !self.contains(id.as_str())))
            .collect()
    }
}

impl FromIterator<ItemId> for OpenSet {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OpenSet {
    type Item = &'a ItemId;
    type IntoIter = std::slice::Iter<'a, ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

/// Which items start collapsed. `true` means collapsed; an absent or
/// `false` entry means the item starts open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollapseMap(HashMap<ItemId, bool>);

impl CollapseMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` as starting collapsed.
    pub fn collapsed(mut self, id: impl Into<ItemId>) -> Self {
        self.0.insert(id.into(), true);
        self
    }

    /// Mark `id` as starting open.
    pub fn expanded(mut self, id: impl Into<ItemId>) -> Self {
        self.0.insert(id.into(), false);
        self
    }

    pub fn is_collapsed(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(ItemId, bool)> for CollapseMap {
    fn from_iter<I: IntoIterator<Item = (ItemId, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The ids of `items` not marked collapsed in `collapsed`, in list order.
pub fn initial_open_set(items: &ItemList, collapsed: &CollapseMap) -> OpenSet {
    items
        .ids()
        .filter(|id| !collapsed.is_collapsed(id.as_str()))
        .cloned()
        .collect()
}
