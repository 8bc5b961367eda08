//! Simulation session
//!
//! Owns the document, the navigator, and the quick-key manager, and
//! feeds keyboard events through them in a fixed order. Each session
//! is self-contained; two sessions never share state.

use vox_a11y::{
    KeyEvent, NavigationHost, Navigator, QuickKeyManager, WrapMarker,
};
use vox_dom::{Document, NodeId};

use crate::config::SimConfig;
use crate::text;

/// Session-owned focus state, handed to handlers as their host
pub struct FocusContext {
    nav_active: bool,
    last_focused: NodeId,
}

impl FocusContext {
    fn new(nav_active: bool) -> Self {
        Self {
            nav_active,
            last_focused: NodeId::NONE,
        }
    }

    /// Last element focus was moved onto
    pub fn last_focused(&self) -> NodeId {
        self.last_focused
    }
}

impl NavigationHost for FocusContext {
    fn navigation_active(&self) -> bool {
        self.nav_active
    }

    fn is_free_text_field(&self, doc: &Document, node: NodeId) -> bool {
        text::is_free_text_field(doc, node)
    }

    fn move_focus(&mut self, doc: &mut Document, node: NodeId) {
        doc.focus(node);
        self.last_focused = node;
        tracing::debug!(?node, tag = ?doc.tree().tag_name(node), "focus moved");
    }
}

/// One simulated screen-reader session over one document
pub struct Session {
    doc: Document,
    navigator: Navigator,
    quick_keys: QuickKeyManager,
    ctx: FocusContext,
}

impl Session {
    /// Scan the document and wire up navigation
    pub fn new(mut doc: Document, config: SimConfig) -> Self {
        let root = if doc.body().is_valid() {
            doc.body()
        } else {
            doc.tree().root()
        };

        let mut navigator = Navigator::new(config.policy);
        navigator.scan(&mut doc, root);
        let quick_keys = QuickKeyManager::new(&config.quick_keys, &doc, root);

        Self {
            doc,
            navigator,
            quick_keys,
            ctx: FocusContext::new(config.start_active),
        }
    }

    /// Feed one keydown through the handlers, in registration order:
    /// quick keys first, then arrow navigation
    pub fn key_down(&mut self, event: &mut KeyEvent) {
        self.quick_keys.dispatch(&mut self.doc, &mut self.ctx, event);
        self.navigator
            .handle_arrow_key(&mut self.doc, &mut self.ctx, event);
    }

    /// Feed one keyup (Tab re-synchronization)
    pub fn key_up(&mut self, event: &KeyEvent) {
        self.navigator
            .handle_tab_key(&mut self.doc, &mut self.ctx, event);
    }

    /// Enable or disable cyclic navigation
    pub fn set_active(&mut self, active: bool) {
        self.ctx.nav_active = active;
    }

    pub fn is_active(&self) -> bool {
        self.ctx.nav_active
    }

    /// Element currently holding simulated focus
    pub fn focused(&self) -> NodeId {
        self.doc.active_element()
    }

    /// Step focus to the next natively-focusable member
    pub fn next_interactive(&mut self) -> Option<NodeId> {
        let node = self.navigator.next_interactive(&self.doc)?;
        self.ctx.move_focus(&mut self.doc, node);
        Some(node)
    }

    /// Step focus to the previous natively-focusable member
    pub fn previous_interactive(&mut self) -> Option<NodeId> {
        let node = self.navigator.previous_interactive(&self.doc)?;
        self.ctx.move_focus(&mut self.doc, node);
        Some(node)
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn quick_keys(&self) -> &QuickKeyManager {
        &self.quick_keys
    }

    /// Navigable-set size
    pub fn navigable_len(&self) -> usize {
        self.navigator.len()
    }

    /// Members that received a synthetic tabindex at scan time
    pub fn tab_index_node_count(&self) -> usize {
        self.navigator.tab_index_node_count()
    }

    /// Wrap marker of the most recent quick-key traversal
    pub fn last_wrap(&self) -> WrapMarker {
        self.quick_keys.last_wrap()
    }
}
