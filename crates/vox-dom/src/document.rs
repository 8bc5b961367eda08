//! Document - High-level document API

use crate::{DomTree, NodeId};

/// A loaded document
pub struct Document {
    /// The underlying tree
    tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
    /// Element currently holding focus
    active_element: NodeId,
}

impl Document {
    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            body_element: NodeId::NONE,
            active_element: NodeId::NONE,
        }
    }

    /// Create a document with html/body scaffolding
    pub fn new(url: &str) -> Self {
        let mut doc = Self::empty(url);
        let html = doc.tree.create_element("html");
        let body = doc.tree.create_element("body");
        doc.tree.append_child(NodeId::ROOT, html);
        doc.tree.append_child(html, body);
        doc.html_element = html;
        doc.body_element = body;
        doc
    }

    /// Locate and cache <html> and <body> after the tree is built
    pub fn finalize(&mut self) {
        for (id, node) in self.tree.descendants(NodeId::ROOT) {
            let Some(elem) = node.as_element() else { continue };
            match elem.name.as_str() {
                "html" if !self.html_element.is_valid() => self.html_element = id,
                "body" if !self.body_element.is_valid() => self.body_element = id,
                _ => {}
            }
            if self.html_element.is_valid() && self.body_element.is_valid() {
                break;
            }
        }
        tracing::debug!(
            nodes = self.tree.len(),
            has_body = self.body_element.is_valid(),
            "document finalized"
        );
    }

    /// Document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(NodeId::ROOT)
            .find(|(_, node)| {
                node.as_element()
                    .is_some_and(|e| e.id.as_deref() == Some(id))
            })
            .map(|(node_id, _)| node_id)
    }

    /// Element currently holding focus (NONE if nothing focused)
    pub fn active_element(&self) -> NodeId {
        self.active_element
    }

    /// Move focus to an element
    pub fn focus(&mut self, id: NodeId) {
        if self.tree.get(id).is_some_and(|n| n.is_element()) {
            self.active_element = id;
        }
    }

    /// Drop focus
    pub fn blur(&mut self) {
        self.active_element = NodeId::NONE;
    }

    /// Access the tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
