//! Collapsible sections for terminal UIs.
//!
//! An [`ExpansionGroup`] renders a list of items, each with a clickable
//! header and content that only exists while the item is open. The crate
//! also carries the small element tree, layout pass, cell buffer and hit
//! test a terminal host needs to draw groups and route clicks back to them.

pub mod buffer;
pub mod element;
pub mod error;
pub mod group;
pub mod hit;
pub mod layout;
pub mod render;
pub mod state;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::Element;
pub use error::ConfigError;
pub use group::{
    CollapseMap, ExpansionGroup, GroupConfig, Item, ItemContent, ItemId, ItemList,
    MountedContent, NestedGroup, OpenSet, TextContent, ToggleHandler, Variant,
    initial_open_set,
};
pub use hit::hit_test;
pub use layout::{LayoutResult, Rect};
pub use render::render_to_buffer;
pub use state::State;
pub use types::*;
