//! Free-text field classification
//!
//! Decides whether typing should take precedence over single-key
//! shortcuts: text-entry inputs, text areas, and textbox-like roles.

use vox_dom::{Document, NodeId};

const TEXT_INPUT_TYPES: &[&str] = &["text", "search", "email", "url", "tel", "password"];
const TEXT_ROLES: &[&str] = &["textbox", "searchbox", "combobox"];

/// Check whether an element accepts free-text typing
pub fn is_free_text_field(doc: &Document, node: NodeId) -> bool {
    let tree = doc.tree();
    let Some(tag) = tree.tag_name(node) else {
        return false;
    };

    match tag {
        "textarea" => true,
        // A type-less <input> is a text input
        "input" => {
            let ty = tree.attribute(node, "type").unwrap_or("text");
            TEXT_INPUT_TYPES.iter().any(|t| ty.eq_ignore_ascii_case(t))
        }
        _ => tree
            .attribute(node, "role")
            .is_some_and(|role| TEXT_ROLES.iter().any(|r| role.eq_ignore_ascii_case(r))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_and(tag_html: &str) -> (Document, NodeId) {
        let doc = vox_html::parse(tag_html);
        let id = doc
            .tree()
            .descendants(doc.body())
            .map(|(id, _)| id)
            .next()
            .unwrap();
        (doc, id)
    }

    #[test]
    fn test_text_inputs() {
        for html in [
            "<input>",
            "<input type='text'>",
            "<input type='password'>",
            "<input type='search'>",
            "<textarea></textarea>",
        ] {
            let (doc, id) = doc_and(html);
            assert!(is_free_text_field(&doc, id), "{html}");
        }
    }

    #[test]
    fn test_non_text_inputs() {
        for html in [
            "<input type='checkbox'>",
            "<input type='radio'>",
            "<input type='submit'>",
            "<button>x</button>",
            "<p>x</p>",
        ] {
            let (doc, id) = doc_and(html);
            assert!(!is_free_text_field(&doc, id), "{html}");
        }
    }

    #[test]
    fn test_textbox_roles() {
        let (doc, id) = doc_and("<div role='combobox'>x</div>");
        assert!(is_free_text_field(&doc, id));

        let (doc, id) = doc_and("<div role='button'>x</div>");
        assert!(!is_free_text_field(&doc, id));
    }
}
