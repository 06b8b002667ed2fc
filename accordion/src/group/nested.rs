//! Groups inside the content of another group's item.

use std::fmt;
use std::sync::Arc;

use super::content::{ItemContent, MountedContent};
use super::{ExpansionGroup, GroupConfig};

/// Item content that mounts an inner [`ExpansionGroup`].
///
/// The closure builds the inner config each time the outer item opens.
/// Whether the inner open items survive the outer item closing depends on
/// that config alone:
///
/// - a config without `open_items` gives a fresh group every time, derived
///   from its `initially_collapsed` map;
/// - a config carrying an embedder-owned `State<OpenSet>` picks up where the
///   previous instance left off.
///
/// # Example
///
/// ```
/// use accordion::{GroupConfig, Item, ItemList, NestedGroup, OpenSet, State};
///
/// let inner_open = State::new(OpenSet::new());
/// let lifted = inner_open.clone();
///
/// let inner = NestedGroup::new(move || {
///     let items = ItemList::new(vec![Item::text("inner1", "Inner 1", "one")])
///         .unwrap_or_default();
///     GroupConfig::new(items)
///         .allow_multiple_open(true)
///         .open_items(lifted.clone())
/// });
///
/// let outer = Item::new("outer1", "Outer 1", inner);
/// assert_eq!(outer.id.as_str(), "outer1");
/// ```
#[derive(Clone)]
pub struct NestedGroup {
    factory: Arc<dyn Fn() -> GroupConfig + Send + Sync>,
}

impl NestedGroup {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> GroupConfig + Send + Sync + 'static,
    {
        Self {
            factory: Arc::new(factory),
        }
    }
}

impl ItemContent for NestedGroup {
    fn mount(&self) -> Box<dyn MountedContent> {
        Box::new(ExpansionGroup::new((self.factory)()))
    }
}

impl fmt::Debug for NestedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NestedGroup").finish_non_exhaustive()
    }
}
