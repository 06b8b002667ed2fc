use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width};

pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    render_element(element, layout, buf);
}

fn render_element(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    if rect.is_empty() {
        return;
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, element, *rect, buf),
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf);
            }
        }
    }
}

fn render_text(text: &str, element: &Element, rect: Rect, buf: &mut Buffer) {
    let padding = &element.padding;
    let inner = rect.shrink(padding.top, padding.right, padding.bottom, padding.left);
    if inner.is_empty() {
        return;
    }

    let text = truncate_to_width(text, inner.width as usize);
    let y = inner.y;
    let mut x = inner.x;

    for ch in text.chars() {
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if x.saturating_add(width) > inner.right() {
            break;
        }

        buf.set(x, y, Cell::new(ch).with_style(element.style));
        if width == 2 {
            buf.set(x + 1, y, Cell::continuation());
        }
        x += width;
    }
}
