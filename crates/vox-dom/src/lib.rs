//! vox DOM - Document substrate
//!
//! Arena-based document tree: the page being explored.
//!
//! Features:
//! - Compact nodes linked by `NodeId` instead of pointers
//! - Attribute and class access with cached id/class lookups
//! - Simple selector queries in document order
//! - Computed visibility (inline `display`/`visibility`)
//! - Document-level active element (focus target)

mod node;
mod tree;
mod document;
mod query;
mod visibility;

pub use node::{Attribute, ElementData, Node, NodeData, TextData};
pub use tree::DomTree;
pub use document::Document;
pub use query::{SelectorList, SimpleSelector};
pub use visibility::is_rendered;

/// Node identifier (index into the arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Document root ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this ID refers to a node at all
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }
}
