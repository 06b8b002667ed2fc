use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::content::{ItemContent, TextContent};
use crate::error::ConfigError;

/// Identifier of an item, unique within its group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One labeled section of a group.
#[derive(Clone)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    /// Secondary text shown after the title.
    pub note: Option<String>,
    pub content: Arc<dyn ItemContent>,
}

impl Item {
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        content: impl ItemContent + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            note: None,
            content: Arc::new(content),
        }
    }

    /// Create an item whose content is a single line of text.
    pub fn text(id: impl Into<ItemId>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(id, title, TextContent::new(body))
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("note", &self.note)
            .finish_non_exhaustive()
    }
}

/// Ordered list of items with unique ids.
#[derive(Debug, Clone, Default)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    /// Build a list, rejecting duplicate ids.
    pub fn new(items: Vec<Item>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(ConfigError::DuplicateItemId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter().map(|item| &item.id)
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether both lists carry the same ids in the same order.
    pub(crate) fn same_ids(&self, other: &ItemList) -> bool {
        self.ids().eq(other.ids())
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
