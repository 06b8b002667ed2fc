//! Element tree for a group.

use std::borrow::Cow;

use super::{ExpansionGroup, ItemId};
use crate::element::Element;
use crate::types::{Edges, TextStyle};

/// Indentation of item content under its header.
const CONTENT_INDENT: u16 = 2;

/// One `/`-free segment of an element id.
///
/// `%` and `/` are percent-encoded, so `{group}/{item}/header` can never be
/// produced by a different group or item id.
fn segment(raw: &str) -> Cow<'_, str> {
    if raw.contains(['%', '/']) {
        Cow::Owned(raw.replace('%', "%25").replace('/', "%2F"))
    } else {
        Cow::Borrowed(raw)
    }
}

pub(super) fn group_id(group: &str) -> String {
    segment(group).into_owned()
}

pub(super) fn item_id(group: &str, item: &ItemId) -> String {
    format!("{}/{}", segment(group), segment(item.as_str()))
}

pub(super) fn header_id(group: &str, item: &ItemId) -> String {
    format!("{}/header", item_id(group, item))
}

pub(super) fn content_id(group: &str, item: &ItemId) -> String {
    format!("{}/content", item_id(group, item))
}

/// Build the group element. Mounted content must be in sync with the open
/// items before calling.
pub(super) fn group_view(group: &mut ExpansionGroup) -> Element {
    let variant = group.config.variant;
    let open = group.open.get();
    let mut container = Element::col().id(group_id(&group.id));

    for (index, item) in group.config.items.iter().enumerate() {
        let is_open = open.contains(item.id.as_str());

        let title_style = if is_open {
            TextStyle::new().bold()
        } else {
            TextStyle::new()
        };

        let mut header = Element::row()
            .id(header_id(&group.id, &item.id))
            .gap(1)
            .clickable(true)
            .expanded(is_open)
            .data("item", item.id.as_str())
            .children([
                Element::text(variant.indicator(is_open).to_string()),
                Element::text(&item.title).style(title_style),
            ]);

        if index == 0 {
            header = header.data("position", "first");
        }
        if let Some(note) = &item.note {
            header = header.child(Element::text(note).style(TextStyle::new().dim()));
        }

        let mut entry = Element::col()
            .id(item_id(&group.id, &item.id))
            .child(header);

        if is_open
            && let Some(mounted) = group.mounted.iter_mut().find(|m| m.id == item.id)
        {
            entry = entry.child(
                Element::col()
                    .id(content_id(&group.id, &item.id))
                    .padding(Edges::left(CONTENT_INDENT))
                    .child(mounted.instance.view()),
            );
        }

        container = container.child(entry);
    }

    container
}
