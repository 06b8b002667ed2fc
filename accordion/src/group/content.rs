//! What an item shows while it is open.

use crate::element::Element;

/// Factory for an item's content.
///
/// A group calls [`mount`](ItemContent::mount) when the item opens and drops
/// the returned instance when it closes, so anything the instance holds is
/// lost on collapse. State that has to outlive a collapse belongs to the
/// embedder.
pub trait ItemContent: Send + Sync {
    fn mount(&self) -> Box<dyn MountedContent>;
}

/// Live content of an open item.
pub trait MountedContent: Send {
    fn view(&mut self) -> Element;

    /// Handle an activation aimed at `target`, an element id inside this
    /// content. Returns true when something reacted to it.
    fn activate(&mut self, _target: &str) -> bool {
        false
    }
}

/// Static text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextContent {
    text: String,
}

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ItemContent for TextContent {
    fn mount(&self) -> Box<dyn MountedContent> {
        Box::new(self.clone())
    }
}

impl MountedContent for TextContent {
    fn view(&mut self) -> Element {
        Element::text(&self.text)
    }
}
