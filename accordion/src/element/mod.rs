mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect every element carrying an `expanded` flag, depth first.
///
/// These are the item headers of all groups in the tree, nested ones
/// included.
pub fn collect_expandable(root: &Element) -> Vec<&Element> {
    let mut found = Vec::new();
    collect_expandable_into(root, &mut found);
    found
}

fn collect_expandable_into<'a>(element: &'a Element, found: &mut Vec<&'a Element>) {
    if element.expanded.is_some() {
        found.push(element);
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_expandable_into(child, found);
        }
    }
}
