//! Navigable-set scanner
//!
//! Walks a subtree once, classifies every element, marks the ones a
//! simulated screen-reader user can land on, and owns the cyclic list
//! the arrow and tab handlers traverse.

use crate::cyclic::CyclicList;
use crate::host::NavigationHost;
use crate::keys::{Key, KeyEvent, KeyPhase};
use crate::policy::NavPolicy;
use vox_dom::{is_rendered, Document, NodeId};

/// Marker class added to every member of the navigable set
pub const NAVIGABLE_CLASS: &str = "vox-navigable";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagClass {
    Focusable,
    Marked,
    Container,
}

/// Scans a subtree and navigates the resulting element set
#[derive(Debug)]
pub struct Navigator {
    policy: NavPolicy,
    list: CyclicList,
    tab_index_node_count: usize,
}

impl Navigator {
    pub fn new(policy: NavPolicy) -> Self {
        Self {
            policy,
            list: CyclicList::default(),
            tab_index_node_count: 0,
        }
    }

    /// Visit every descendant element of `root` exactly once, in
    /// document order, marking the qualifying ones
    ///
    /// Membership and visibility are decided here, once; later style or
    /// attribute changes are not re-evaluated.
    pub fn scan(&mut self, doc: &mut Document, root: NodeId) {
        let ids: Vec<NodeId> = doc
            .tree()
            .descendants(root)
            .filter(|(_, node)| node.is_element())
            .map(|(id, _)| id)
            .collect();

        self.tab_index_node_count = 0;
        let mut members = Vec::new();
        for id in ids {
            self.process_node(doc, id, &mut members);
        }

        tracing::debug!(
            members = members.len(),
            synthetic = self.tab_index_node_count,
            "navigable scan complete"
        );
        self.list = CyclicList::from_items(members);
    }

    /// Classify one element and, if it qualifies, mark it and add it
    /// to the set
    fn process_node(&mut self, doc: &mut Document, id: NodeId, members: &mut Vec<NodeId>) {
        let needs_tabindex = {
            let tree = doc.tree();
            let Some(elem) = tree.get(id).and_then(|n| n.as_element()) else {
                return;
            };

            let tag = elem.name.as_str();
            let class = if self.policy.is_focusable_tag(tag) {
                TagClass::Focusable
            } else if self.policy.is_marked_tag(tag) {
                TagClass::Marked
            } else if self.policy.is_container_tag(tag) {
                TagClass::Container
            } else {
                return;
            };

            // A generic container only counts with an explicit role or
            // at least one direct non-whitespace text child.
            if class == TagClass::Container {
                let has_role = elem.has_attr("role");
                let has_text = tree
                    .children(id)
                    .any(|(_, n)| n.as_text().is_some_and(|t| !t.trim().is_empty()));
                if !has_role && !has_text {
                    return;
                }
            }

            // Visibility gate, evaluated after tag classification
            if !is_rendered(tree, id) {
                return;
            }
            if elem.attr("aria-hidden") == Some("true") {
                return;
            }

            class != TagClass::Focusable && !elem.has_attr("tabindex")
        };

        let tree = doc.tree_mut();
        tree.add_class(id, NAVIGABLE_CLASS);
        if needs_tabindex {
            tree.set_attribute(id, "tabindex", "-1");
            self.tab_index_node_count += 1;
        }
        members.push(id);
    }

    /// The navigable list
    pub fn list(&self) -> &CyclicList {
        &self.list
    }

    /// The navigable list, mutable
    pub fn list_mut(&mut self) -> &mut CyclicList {
        &mut self.list
    }

    /// Number of set members
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Check for an empty set
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// How many members received a synthetic tabindex during the scan
    pub fn tab_index_node_count(&self) -> usize {
        self.tab_index_node_count
    }

    /// Arrow-key handler: right advances, left retreats
    ///
    /// Only acts while the host allows navigation; suppresses the
    /// event default exactly when it moved somewhere.
    pub fn handle_arrow_key(
        &mut self,
        doc: &mut Document,
        host: &mut dyn NavigationHost,
        event: &mut KeyEvent,
    ) {
        if event.phase != KeyPhase::Down || !host.navigation_active() {
            return;
        }
        let node = match event.key {
            Key::ArrowRight => self.list.next(),
            Key::ArrowLeft => self.list.previous(),
            _ => return,
        };
        if let Some(node) = node {
            tracing::trace!(?node, wrap = ?self.list.wrap(), "arrow step");
            event.prevent_default();
            host.move_focus(doc, node);
        }
    }

    /// Tab keyup handler: re-synchronize the cursor to whatever the
    /// host's native tab order just focused
    ///
    /// Tab and arrow navigation share one cursor this way.
    pub fn handle_tab_key(
        &mut self,
        doc: &mut Document,
        host: &mut dyn NavigationHost,
        event: &KeyEvent,
    ) {
        if event.phase != KeyPhase::Up || event.key != Key::Tab {
            return;
        }
        let active = doc.active_element();
        if let Some(node) = self.list.set_current(active) {
            host.move_focus(doc, node);
        }
    }

    /// Step forward to the next natively-focusable member
    pub fn next_interactive(&mut self, doc: &Document) -> Option<NodeId> {
        self.step_interactive(doc, true)
    }

    /// Step backward to the previous natively-focusable member
    pub fn previous_interactive(&mut self, doc: &Document) -> Option<NodeId> {
        self.step_interactive(doc, false)
    }

    /// Same list, same wrap semantics, members restricted to the
    /// focusable tag set. With no other interactive member the cursor
    /// and marker are put back and the current node returned unchanged.
    fn step_interactive(&mut self, doc: &Document, forward: bool) -> Option<NodeId> {
        let saved_cursor = self.list.cursor_index();
        let saved_wrap = self.list.wrap();
        let start = self.list.current();

        for _ in 0..self.list.len() {
            let node = if forward {
                self.list.next()
            } else {
                self.list.previous()
            };
            let Some(node) = node else { break };
            if start == Some(node) {
                break;
            }
            let interactive = doc
                .tree()
                .tag_name(node)
                .is_some_and(|t| self.policy.is_focusable_tag(t));
            if interactive {
                return Some(node);
            }
        }

        self.list.restore(saved_cursor, saved_wrap);
        self.list.current()
    }
}
