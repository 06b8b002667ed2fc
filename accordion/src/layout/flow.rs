use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::Direction;

pub type LayoutResult = HashMap<String, Rect>;

/// Position every element of the tree inside `available`.
///
/// Containers take the full width they are given. Columns stack their
/// children; rows place them left to right at their natural width. Text is
/// one line tall. Elements pushed past the bottom edge get a zero height.
pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, &mut result);
    result
}

/// Natural `(width, height)` of an element, padding included.
pub fn measure(element: &Element) -> (u16, u16) {
    let (width, height) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (display_width(text).min(u16::MAX as usize) as u16, 1),
        Content::Children(children) => {
            let gaps = element.gap.saturating_mul(children.len().saturating_sub(1) as u16);
            let sizes = children.iter().map(measure);
            match element.direction {
                Direction::Column => sizes.fold((0u16, gaps), |(w, h), (cw, ch)| {
                    (w.max(cw), h.saturating_add(ch))
                }),
                Direction::Row => sizes.fold((gaps, 0u16), |(w, h), (cw, ch)| {
                    (w.saturating_add(cw), h.max(ch))
                }),
            }
        }
    };

    (
        width.saturating_add(element.padding.horizontal()),
        height.saturating_add(element.padding.vertical()),
    )
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) {
    let (natural_width, natural_height) = measure(element);

    let width = match &element.content {
        Content::Children(_) => available.width,
        _ => natural_width.min(available.width),
    };
    let height = natural_height.min(available.height);

    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, result);
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    let padding = &element.padding;
    let inner = rect.shrink(padding.top, padding.right, padding.bottom, padding.left);

    match element.direction {
        Direction::Column => {
            let mut y = inner.y;
            for child in children {
                let remaining = inner.bottom().saturating_sub(y);
                let slot = Rect::new(inner.x, y.min(inner.bottom()), inner.width, remaining);
                layout_element(child, slot, result);
                let child_height = result.get(&child.id).map_or(0, |r| r.height);
                y = y.saturating_add(child_height).saturating_add(element.gap);
            }
        }
        Direction::Row => {
            // Rows are a single strip: children share the row's top edge.
            let mut x = inner.x;
            for child in children {
                let remaining = inner.right().saturating_sub(x);
                let slot = Rect::new(x.min(inner.right()), inner.y, remaining, inner.height);
                layout_element(child, slot, result);
                let child_width = result.get(&child.id).map_or(0, |r| r.width);
                x = x.saturating_add(child_width).saturating_add(element.gap);
            }
        }
    }
}
