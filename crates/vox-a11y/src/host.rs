//! Host seam
//!
//! The owning session supplies focus movement, the navigation-allowed
//! predicate, and free-text-field classification through this trait;
//! handlers receive it by reference instead of reading shared state.

use vox_dom::{Document, NodeId};

/// What the owning session provides to the navigation handlers
pub trait NavigationHost {
    /// Is cyclic navigation currently allowed?
    fn navigation_active(&self) -> bool;

    /// Is this element a free-text input (typing takes precedence
    /// over single-character shortcuts)?
    fn is_free_text_field(&self, doc: &Document, node: NodeId) -> bool;

    /// Move simulated screen-reader focus onto an element
    fn move_focus(&mut self, doc: &mut Document, node: NodeId);
}
