//! Expansion group - a list of items that open and close independently or
//! one at a time.
//!
//! A group keeps the ordered set of open item ids, toggles it on header
//! activation, and mounts the content of open items only. Each group owns
//! its own state; nested groups never share it unless the embedder hands
//! the same [`State`] to both.
//!
//! # Example
//!
//! ```
//! use accordion::{ExpansionGroup, GroupConfig, Item, ItemId, ItemList};
//!
//! let items = ItemList::new(vec![
//!     Item::text("a", "A", "alpha"),
//!     Item::text("b", "B", "beta"),
//!     Item::text("c", "C", "gamma"),
//! ])
//! .unwrap();
//!
//! let mut group = ExpansionGroup::new(GroupConfig::new(items));
//! assert_eq!(group.open_items().len(), 3);
//!
//! group.toggle("b");
//! assert_eq!(group.open_items().ids(), [ItemId::from("b")]);
//! ```

mod config;
mod content;
mod item;
mod nested;
mod open_set;
mod view;

use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, trace};

pub use config::{GroupConfig, ToggleHandler, Variant};
pub use content::{ItemContent, MountedContent, TextContent};
pub use item::{Item, ItemId, ItemList};
pub use nested::NestedGroup;
pub use open_set::{CollapseMap, OpenSet, initial_open_set};

use crate::element::Element;
use crate::state::State;

fn next_group_id() -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    format!("accordion-{}", COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Content mounted for one open item.
struct Mounted {
    id: ItemId,
    instance: Box<dyn MountedContent>,
}

/// A mounted group instance.
///
/// Created from a [`GroupConfig`]; re-fed with a fresh config on every host
/// render via [`reconfigure`](Self::reconfigure); dropped on unmount.
pub struct ExpansionGroup {
    id: String,
    config: GroupConfig,
    open: State<OpenSet>,
    mounted: Vec<Mounted>,
}

impl ExpansionGroup {
    pub fn new(config: GroupConfig) -> Self {
        let id = config.id.clone().unwrap_or_else(next_group_id);
        let open = match &config.open_items {
            Some(handle) => handle.clone(),
            None => State::new(initial_open_set(
                &config.items,
                &config.initially_collapsed,
            )),
        };

        debug!(
            "Mounting group '{}' ({} items, {})",
            id,
            config.items.len(),
            if config.open_items.is_some() {
                "controlled"
            } else {
                "uncontrolled"
            }
        );

        let mut group = Self {
            id,
            config,
            open,
            mounted: Vec::new(),
        };
        group.sync_mounted();
        group
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the embedder owns the open items.
    pub fn is_controlled(&self) -> bool {
        self.config.open_items.is_some()
    }

    /// Snapshot of the open item ids, in the order they were opened.
    pub fn open_items(&self) -> OpenSet {
        self.open.get()
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.with(|open| open.contains(id))
    }

    /// Whether the content of `id` is currently mounted.
    pub fn is_mounted(&self, id: &str) -> bool {
        self.mounted.iter().any(|m| m.id.as_str() == id)
    }

    /// Feed the group the configuration of the current render pass.
    ///
    /// When the item ids or the collapse map differ from the previous pass,
    /// an uncontrolled group throws away its open items and derives them
    /// again; toggles made since are lost. Unchanged inputs leave the open
    /// items alone. Everything else in the config is simply replaced.
    pub fn reconfigure(&mut self, config: GroupConfig) {
        let inputs_changed = !self.config.items.same_ids(&config.items)
            || self.config.initially_collapsed != config.initially_collapsed;

        if let Some(id) = &config.id {
            self.id = id.clone();
        }

        match (&self.config.open_items, &config.open_items) {
            (Some(old), Some(new)) if old.ptr_eq(new) => {}
            (_, Some(new)) => {
                debug!("Group '{}' now follows an embedder-owned state", self.id);
                self.open = new.clone();
            }
            (Some(_), None) => {
                debug!("Group '{}' now owns its state", self.id);
                self.open = State::new(initial_open_set(
                    &config.items,
                    &config.initially_collapsed,
                ));
            }
            (None, None) if inputs_changed => {
                debug!("Group '{}' inputs changed, re-deriving open items", self.id);
                self.open
                    .set(initial_open_set(&config.items, &config.initially_collapsed));
            }
            (None, None) => {}
        }

        self.config = config;
        self.sync_mounted();
    }

    /// Open `id` if it is closed, close it if it is open.
    ///
    /// Without `allow_multiple_open`, opening an item closes the one that
    /// was open. The `on_toggle` callback then runs once with the new open
    /// items. Ids that match no item are toggled all the same.
    pub fn toggle(&mut self, id: &str) {
        let allow_multiple_open = self.config.allow_multiple_open;
        self.open
            .update(|open| open.toggle(id, allow_multiple_open));
        let open = self.open.get();
        trace!("Group '{}' toggled '{}': {:?}", self.id, id, open.ids());

        self.sync_mounted();

        if let Some(on_toggle) = &self.config.on_toggle {
            on_toggle(&open);
        }
    }

    /// Route an activation to the header it targets.
    ///
    /// Header ids of this group toggle their item; anything else is offered
    /// to the mounted content. Returns whether something reacted.
    pub fn activate(&mut self, target: &str) -> bool {
        let item = self
            .config
            .items
            .iter()
            .find(|item| view::header_id(&self.id, &item.id) == target)
            .map(|item| item.id.clone());

        if let Some(item) = item {
            self.toggle(item.as_str());
            return true;
        }

        self.sync_mounted();
        self.mounted
            .iter_mut()
            .any(|mounted| mounted.instance.activate(target))
    }

    /// Build the element tree for the current state.
    pub fn view(&mut self) -> Element {
        self.sync_mounted();
        view::group_view(self)
    }

    /// Mount content for open items and drop it for closed or removed ones.
    ///
    /// Instances are keyed by item id: a re-supplied item keeps its mounted
    /// content even when its factory was rebuilt.
    ///
    /// Run after every state change; a controlled group also picks up
    /// changes the embedder made to the shared handle here.
    fn sync_mounted(&mut self) {
        let open = self.open.get();
        let items = &self.config.items;
        let group_id = &self.id;

        self.mounted.retain(|mounted| {
            let keep =
                open.contains(mounted.id.as_str()) && items.get(mounted.id.as_str()).is_some();
            if !keep {
                debug!("Group '{}' unmounting content of '{}'", group_id, mounted.id);
            }
            keep
        });

        for item in items {
            if open.contains(item.id.as_str()) && !self.mounted.iter().any(|m| m.id == item.id) {
                debug!("Group '{}' mounting content of '{}'", group_id, item.id);
                self.mounted.push(Mounted {
                    id: item.id.clone(),
                    instance: item.content.mount(),
                });
            }
        }
    }
}

impl MountedContent for ExpansionGroup {
    fn view(&mut self) -> Element {
        ExpansionGroup::view(self)
    }

    fn activate(&mut self, target: &str) -> bool {
        ExpansionGroup::activate(self, target)
    }
}

impl Drop for ExpansionGroup {
    fn drop(&mut self) {
        debug!("Unmounting group '{}'", self.id);
    }
}

impl std::fmt::Debug for ExpansionGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpansionGroup")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("open", &self.open.get())
            .field(
                "mounted",
                &self.mounted.iter().map(|m| &m.id).collect::<Vec<_>>(),
            )
            .finish()
    }
}
