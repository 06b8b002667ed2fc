//! The nested demo: an outer group whose first item holds an inner group.

use accordion::{
    CollapseMap, Element, ExpansionGroup, GroupConfig, Item, ItemList, LayoutResult, NestedGroup,
    OpenSet, State, TextStyle, Variant, hit_test, initial_open_set,
};
use log::{debug, info};

use crate::cli::Mode;
use crate::error::DemoError;

fn inner_items() -> Result<ItemList, accordion::ConfigError> {
    ItemList::new(vec![
        Item::text("inner1", "Inner Accordion 1", "Inner Content 1"),
        Item::text("inner2", "Inner Accordion 2", "Inner Content 2"),
    ])
}

fn inner_collapsed() -> CollapseMap {
    CollapseMap::new().expanded("inner1").expanded("inner2")
}

/// Inner group config for the chosen mode.
///
/// Lifted mode hands every inner instance the same embedder-owned handle,
/// so the inner open items outlive the outer item closing. Uncontrolled
/// mode lets each instance start over from its collapse map.
fn inner_group(mode: Mode, items: ItemList) -> NestedGroup {
    let lifted = match mode {
        Mode::Lifted => Some(State::new(initial_open_set(&items, &inner_collapsed()))),
        Mode::Uncontrolled => None,
    };

    NestedGroup::new(move || {
        let config = GroupConfig::new(items.clone())
            .id("inner")
            .allow_multiple_open(true)
            .variant(Variant::Default)
            .initially_collapsed(inner_collapsed())
            .on_toggle(|open: &OpenSet| info!("Inner toggled: {:?}", open.ids()));

        match &lifted {
            Some(handle) => config.open_items(handle.clone()),
            None => config,
        }
    })
}

/// Build the outer group.
pub fn parent_group(mode: Mode) -> Result<ExpansionGroup, DemoError> {
    let items = ItemList::new(vec![
        Item::new(
            "outer1",
            "Outer Accordion 1",
            inner_group(mode, inner_items()?),
        )
        .note("holds a nested group"),
        Item::text("outer2", "Outer Accordion 2", "Outer Content 2"),
    ])?;

    let config = GroupConfig::new(items)
        .id("outer")
        .allow_multiple_open(true)
        .variant(Variant::Alternative)
        .initially_collapsed(CollapseMap::new().expanded("outer1").expanded("outer2"))
        .on_toggle(|open: &OpenSet| info!("Outer toggled: {:?}", open.ids()));

    Ok(ExpansionGroup::new(config))
}

/// Full screen: title, the group, and a status footer.
pub fn screen(group: &mut ExpansionGroup, mode: Mode) -> Element {
    let open: Vec<String> = group.open_items().iter().map(|id| id.to_string()).collect();

    Element::col()
        .id("screen")
        .padding(accordion::Edges::all(1))
        .gap(1)
        .child(
            Element::text(format!("Nested groups ({mode} inner state)"))
                .style(TextStyle::new().bold()),
        )
        .child(group.view())
        .child(
            Element::col()
                .child(Element::text(format!("Outer open: [{}]", open.join(", "))))
                .child(
                    Element::text("Click a header to toggle it. Press q to quit.")
                        .style(TextStyle::new().dim()),
                ),
        )
}

/// Route a click on the drawn `root` to the group.
///
/// Returns the clicked element id. `layout` must belong to `root`.
pub fn click(
    group: &mut ExpansionGroup,
    root: &Element,
    layout: &LayoutResult,
    x: u16,
    y: u16,
) -> Option<String> {
    let target = hit_test(layout, root, x, y)?;
    let handled = group.activate(&target);
    debug!("Click on '{}' handled: {}", target, handled);
    Some(target)
}

#[cfg(test)]
mod tests {
    use accordion::element::find_element;

    use super::*;

    fn inner_open(group: &mut ExpansionGroup, item: &str) -> Option<bool> {
        let view = group.view();
        find_element(&view, &format!("inner/{item}/header")).and_then(|header| header.expanded)
    }

    fn collapse_and_reopen_outer(group: &mut ExpansionGroup) {
        group.toggle("outer1");
        assert_eq!(inner_open(group, "inner2"), None);
        group.toggle("outer1");
    }

    #[test]
    fn test_everything_starts_open() {
        let mut group = parent_group(Mode::Lifted).unwrap();
        assert_eq!(group.open_items().len(), 2);
        assert_eq!(inner_open(&mut group, "inner1"), Some(true));
        assert_eq!(inner_open(&mut group, "inner2"), Some(true));
    }

    #[test]
    fn test_lifted_inner_state_survives() {
        let mut group = parent_group(Mode::Lifted).unwrap();
        assert!(group.activate("inner/inner2/header"));

        collapse_and_reopen_outer(&mut group);

        assert_eq!(inner_open(&mut group, "inner1"), Some(true));
        assert_eq!(inner_open(&mut group, "inner2"), Some(false));
    }

    #[test]
    fn test_uncontrolled_inner_state_resets() {
        let mut group = parent_group(Mode::Uncontrolled).unwrap();
        assert!(group.activate("inner/inner2/header"));
        assert_eq!(inner_open(&mut group, "inner2"), Some(false));

        collapse_and_reopen_outer(&mut group);

        assert_eq!(inner_open(&mut group, "inner2"), Some(true));
    }

    fn draw(group: &mut ExpansionGroup, mode: Mode) -> (Element, LayoutResult) {
        let root = screen(group, mode);
        let layout = accordion::layout::layout(&root, accordion::Rect::from_size(60, 20));
        (root, layout)
    }

    #[test]
    fn test_clicks_follow_the_redrawn_layout() {
        let mode = Mode::Uncontrolled;
        let mut group = parent_group(mode).unwrap();

        let (root, layout) = draw(&mut group, mode);
        assert_eq!(
            click(&mut group, &root, &layout, 10, 4).as_deref(),
            Some("inner/inner1/header")
        );
        assert_eq!(
            click(&mut group, &root, &layout, 10, 3).as_deref(),
            Some("outer/outer1/header")
        );
        assert!(!group.is_open("outer1"));

        // Row 4 held the nested group; now it is the next outer header
        let (root, layout) = draw(&mut group, mode);
        assert_eq!(
            click(&mut group, &root, &layout, 10, 4).as_deref(),
            Some("outer/outer2/header")
        );
        assert!(!group.is_open("outer2"));
    }

    #[test]
    fn test_click_outside_headers_does_nothing() {
        let mode = Mode::Lifted;
        let mut group = parent_group(mode).unwrap();
        let (root, layout) = draw(&mut group, mode);

        assert_eq!(click(&mut group, &root, &layout, 10, 1), None);
        assert_eq!(group.open_items().len(), 2);
    }

    #[test]
    fn test_screen_reports_outer_state() {
        let mut group = parent_group(Mode::Uncontrolled).unwrap();
        group.toggle("outer2");

        let root = screen(&mut group, Mode::Uncontrolled);
        let layout = accordion::layout::layout(&root, accordion::Rect::from_size(60, 20));
        let mut buf = accordion::Buffer::new(60, 20);
        accordion::render_to_buffer(&root, &layout, &mut buf);
        let lines = buf.lines();

        assert_eq!(lines[1], " Nested groups (uncontrolled inner state)");
        assert_eq!(lines[3], " − Outer Accordion 1 holds a nested group");
        assert!(lines.iter().any(|line| line == " Outer open: [outer1]"));
        assert!(lines.iter().any(|line| line == " + Outer Accordion 2"));
    }
}
