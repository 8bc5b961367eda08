//! Computed visibility
//!
//! The simulator has no layout engine; visibility is computed from
//! inline `style` declarations. `display: none` hides a subtree
//! outright, `visibility` is inherited from the nearest ancestor that
//! sets it explicitly.

use crate::{DomTree, NodeId};

/// Read one declaration out of an inline style attribute
fn inline_style<'a>(tree: &'a DomTree, id: NodeId, property: &str) -> Option<&'a str> {
    let style = tree.attribute(id, "style")?;
    for decl in style.split(';') {
        let mut parts = decl.splitn(2, ':');
        let name = parts.next()?.trim();
        if name.eq_ignore_ascii_case(property) {
            return Some(parts.next().unwrap_or("").trim());
        }
    }
    None
}

/// Check whether an element is rendered at all
///
/// False if the element or any ancestor declares `display: none`, or if
/// the nearest explicit `visibility` declaration is `hidden`.
pub fn is_rendered(tree: &DomTree, id: NodeId) -> bool {
    let mut cur = id;
    while cur.is_valid() {
        if inline_style(tree, cur, "display").is_some_and(|v| v.eq_ignore_ascii_case("none")) {
            return false;
        }
        cur = tree.parent(cur);
    }

    let mut cur = id;
    while cur.is_valid() {
        if let Some(v) = inline_style(tree, cur, "visibility") {
            return !v.eq_ignore_ascii_case("hidden");
        }
        cur = tree.parent(cur);
    }
    true
}
