//! Group configuration.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::item::ItemList;
use super::open_set::{CollapseMap, OpenSet};
use crate::state::State;

/// Callback receiving the open items after every toggle.
pub type ToggleHandler = Arc<dyn Fn(&OpenSet) + Send + Sync>;

/// Indicator style for item headers. Has no effect on state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Arrows: ▲ when open, ▼ when closed.
    #[default]
    Default,
    /// Signs: − when open, + when closed.
    Alternative,
}

impl Variant {
    pub fn indicator(self, open: bool) -> char {
        match (self, open) {
            (Variant::Default, true) => '▲',
            (Variant::Default, false) => '▼',
            (Variant::Alternative, true) => '−',
            (Variant::Alternative, false) => '+',
        }
    }
}

/// Configuration for an [`ExpansionGroup`](super::ExpansionGroup).
///
/// Which optional inputs are supplied decides how the group coordinates
/// with its embedder:
///
/// - without [`open_items`](Self::open_items) the group owns its open items,
///   derives them from [`initially_collapsed`](Self::initially_collapsed)
///   and only reports changes through [`on_toggle`](Self::on_toggle);
/// - with `open_items` the embedder owns them. The group reads and writes
///   through the shared handle, ignores `initially_collapsed`, and the
///   value survives the group being dropped and rebuilt.
///
/// # Example
///
/// ```
/// use accordion::{CollapseMap, ExpansionGroup, GroupConfig, Item, ItemList};
///
/// let items = ItemList::new(vec![
///     Item::text("a", "First", "first body"),
///     Item::text("b", "Second", "second body"),
/// ])
/// .unwrap();
///
/// let group = ExpansionGroup::new(
///     GroupConfig::new(items).initially_collapsed(CollapseMap::new().collapsed("a")),
/// );
/// assert!(!group.is_open("a"));
/// assert!(group.is_open("b"));
/// ```
#[derive(Clone, Default)]
pub struct GroupConfig {
    /// Element id namespace. A process-unique id is used when unset.
    pub id: Option<String>,
    pub items: ItemList,
    pub allow_multiple_open: bool,
    pub initially_collapsed: CollapseMap,
    pub variant: Variant,
    pub on_toggle: Option<ToggleHandler>,
    pub open_items: Option<State<OpenSet>>,
}

impl GroupConfig {
    pub fn new(items: ItemList) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn items(mut self, items: ItemList) -> Self {
        self.items = items;
        self
    }

    pub fn allow_multiple_open(mut self, allow: bool) -> Self {
        self.allow_multiple_open = allow;
        self
    }

    pub fn initially_collapsed(mut self, collapsed: CollapseMap) -> Self {
        self.initially_collapsed = collapsed;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn on_toggle<F>(mut self, handler: F) -> Self
    where
        F: Fn(&OpenSet) + Send + Sync + 'static,
    {
        self.on_toggle = Some(Arc::new(handler));
        self
    }

    /// Let the embedder own the open items through a shared handle.
    pub fn open_items(mut self, open: State<OpenSet>) -> Self {
        self.open_items = Some(open);
        self
    }
}

impl fmt::Debug for GroupConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupConfig")
            .field("id", &self.id)
            .field("items", &self.items)
            .field("allow_multiple_open", &self.allow_multiple_open)
            .field("initially_collapsed", &self.initially_collapsed)
            .field("variant", &self.variant)
            .field("on_toggle", &self.on_toggle.is_some())
            .field("controlled", &self.open_items.is_some())
            .finish()
    }
}
