//! Cyclic element list
//!
//! An ordered snapshot of element references with a movable cursor.
//! Stepping past either end wraps to the other and records which
//! boundary was crossed.

use vox_dom::{DomTree, NodeId, SelectorList};

/// Which boundary the most recent step crossed, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMarker {
    /// No boundary crossed
    #[default]
    None,
    /// Wrapped past the end, back to the start
    Start,
    /// Wrapped past the start, back to the end
    End,
}

/// Ordered element list with a cursor and wrap signaling
///
/// Membership is a snapshot taken at build time; only the cursor and
/// wrap marker mutate afterwards.
#[derive(Debug, Default)]
pub struct CyclicList {
    items: Vec<NodeId>,
    cursor: Option<usize>,
    wrap: WrapMarker,
}

impl CyclicList {
    /// Build from an explicit item sequence
    pub fn from_items(items: Vec<NodeId>) -> Self {
        Self {
            items,
            cursor: None,
            wrap: WrapMarker::None,
        }
    }

    /// Build from a selector list under `root`, in document order
    ///
    /// An unparseable or non-matching selector yields a valid empty list.
    pub fn from_selector(tree: &DomTree, root: NodeId, selector: &str) -> Self {
        let items = SelectorList::parse(selector)
            .map(|list| list.query_all(tree, root))
            .unwrap_or_default();
        Self::from_items(items)
    }

    /// Build from a predicate over the descendant elements of `root`
    pub fn from_predicate<F>(tree: &DomTree, root: NodeId, mut predicate: F) -> Self
    where
        F: FnMut(&DomTree, NodeId) -> bool,
    {
        let items = tree
            .descendants(root)
            .filter(|(id, node)| node.is_element() && predicate(tree, *id))
            .map(|(id, _)| id)
            .collect();
        Self::from_items(items)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check for an empty list
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Member snapshot
    pub fn items(&self) -> &[NodeId] {
        &self.items
    }

    /// Membership test
    pub fn contains(&self, node: NodeId) -> bool {
        self.items.contains(&node)
    }

    /// Boundary crossed by the most recent `next`/`previous`
    pub fn wrap(&self) -> WrapMarker {
        self.wrap
    }

    /// Cursor position (None = unpositioned)
    pub fn cursor_index(&self) -> Option<usize> {
        self.cursor
    }

    /// Member under the cursor
    pub fn current(&self) -> Option<NodeId> {
        self.cursor.map(|i| self.items[i])
    }

    /// Reposition the cursor onto a member
    ///
    /// A non-member unpositions the cursor and returns None. The wrap
    /// marker is left untouched either way.
    pub fn set_current(&mut self, node: NodeId) -> Option<NodeId> {
        match self.items.iter().position(|&n| n == node) {
            Some(i) => {
                self.cursor = Some(i);
                Some(node)
            }
            None => {
                self.cursor = None;
                None
            }
        }
    }

    /// Step forward, wrapping to the start past the last member
    pub fn next(&mut self) -> Option<NodeId> {
        if self.items.is_empty() {
            return None;
        }
        self.wrap = WrapMarker::None;
        if self.items.len() == 1 {
            // A singleton never wraps
            self.cursor = Some(0);
            return Some(self.items[0]);
        }

        let idx = match self.cursor {
            Some(i) if i + 1 < self.items.len() => i + 1,
            Some(_) => {
                self.wrap = WrapMarker::Start;
                0
            }
            None => 0,
        };
        self.cursor = Some(idx);
        Some(self.items[idx])
    }

    /// Step backward, wrapping to the end past the first member
    ///
    /// From the unpositioned state this lands on the last member and
    /// reports an end wrap, while `next` from the same state reports
    /// none. Observed behavior, kept as-is.
    pub fn previous(&mut self) -> Option<NodeId> {
        if self.items.is_empty() {
            return None;
        }
        self.wrap = WrapMarker::None;
        if self.items.len() == 1 {
            self.cursor = Some(0);
            return Some(self.items[0]);
        }

        let idx = match self.cursor {
            Some(i) if i > 0 => i - 1,
            _ => {
                self.wrap = WrapMarker::End;
                self.items.len() - 1
            }
        };
        self.cursor = Some(idx);
        Some(self.items[idx])
    }

    /// Put cursor and wrap marker back to a saved state
    pub(crate) fn restore(&mut self, cursor: Option<usize>, wrap: WrapMarker) {
        self.cursor = cursor;
        self.wrap = wrap;
    }
}
