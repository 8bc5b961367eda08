//! Quick keys
//!
//! Single-character shortcuts bound to element lists: the lowercase
//! form advances through the list, the uppercase form retreats.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cyclic::{CyclicList, WrapMarker};
use crate::host::NavigationHost;
use crate::keys::{Key, KeyEvent, KeyPhase};
use vox_dom::{Document, DomTree, NodeId};

/// Trigger-to-selector table, fixed at construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyMap {
    entries: Vec<(char, String)>,
}

impl KeyMap {
    /// An empty table
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add one trigger/selector pair
    pub fn bind(mut self, trigger: char, selector: &str) -> Self {
        self.entries.push((trigger, selector.to_string()));
        self
    }

    pub fn entries(&self) -> &[(char, String)] {
        &self.entries
    }
}

impl Default for KeyMap {
    /// The stock table: one key per common element kind
    fn default() -> Self {
        Self::empty()
            .bind('h', "h1, h2, h3, h4, h5, h6")
            .bind('k', "a")
            .bind('l', "ul, ol")
            .bind('t', "table")
            .bind('b', "button")
            .bind('g', "img")
            .bind('f', "input, select, textarea, button")
    }
}

/// One trigger character bound to one element list
#[derive(Debug)]
pub struct KeyBinding {
    trigger: char,
    matcher: String,
    list: CyclicList,
}

impl KeyBinding {
    /// Resolve a selector under `root`; None if the selector is blank
    /// or matches nothing
    fn build(trigger: char, selector: &str, tree: &DomTree, root: NodeId) -> Option<Self> {
        let matcher = selector.trim();
        if matcher.is_empty() {
            return None;
        }
        let list = CyclicList::from_selector(tree, root, matcher);
        if list.is_empty() {
            return None;
        }
        Some(Self {
            trigger: trigger.to_ascii_lowercase(),
            matcher: matcher.to_string(),
            list,
        })
    }

    /// Canonical (lowercase) trigger
    pub fn trigger(&self) -> char {
        self.trigger
    }

    /// The selector this binding was built from
    pub fn matcher(&self) -> &str {
        &self.matcher
    }

    pub fn list(&self) -> &CyclicList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut CyclicList {
        &mut self.list
    }
}

/// Canonical trigger → binding
///
/// Entries that resolve to an empty list are dropped at construction,
/// silently; so are blank selectors.
#[derive(Debug, Default)]
pub struct KeyRegistry {
    bindings: HashMap<char, KeyBinding>,
}

impl KeyRegistry {
    /// Resolve a key map against a subtree
    pub fn build(map: &KeyMap, tree: &DomTree, root: NodeId) -> Self {
        let mut bindings = HashMap::new();
        for (trigger, selector) in map.entries() {
            match KeyBinding::build(*trigger, selector, tree, root) {
                Some(binding) => {
                    bindings.insert(binding.trigger(), binding);
                }
                None => {
                    tracing::debug!(%trigger, %selector, "dropping quick key with no targets");
                }
            }
        }
        Self { bindings }
    }

    pub fn get(&self, trigger: char) -> Option<&KeyBinding> {
        self.bindings.get(&trigger)
    }

    pub fn get_mut(&mut self, trigger: char) -> Option<&mut KeyBinding> {
        self.bindings.get_mut(&trigger)
    }

    pub fn contains(&self, trigger: char) -> bool {
        self.bindings.contains_key(&trigger)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Action invoked with the matched element on a successful dispatch
pub type QuickKeyAction = Box<dyn FnMut(&mut Document, NodeId, &KeyEvent)>;

/// Routes keystrokes to the bound element lists
///
/// Owned by one session; nothing here is shared or global, so several
/// managers can coexist on narrower roots.
pub struct QuickKeyManager {
    registry: KeyRegistry,
    action: Option<QuickKeyAction>,
    last_wrap: WrapMarker,
}

impl QuickKeyManager {
    /// Build a manager over `root` with the default move-focus action
    pub fn new(map: &KeyMap, doc: &Document, root: NodeId) -> Self {
        Self {
            registry: KeyRegistry::build(map, doc.tree(), root),
            action: None,
            last_wrap: WrapMarker::None,
        }
    }

    /// Build a manager with a caller-supplied action
    pub fn with_action(map: &KeyMap, doc: &Document, root: NodeId, action: QuickKeyAction) -> Self {
        Self {
            action: Some(action),
            ..Self::new(map, doc, root)
        }
    }

    pub fn registry(&self) -> &KeyRegistry {
        &self.registry
    }

    /// Wrap marker of the binding most recently traversed
    pub fn last_wrap(&self) -> WrapMarker {
        self.last_wrap
    }

    /// Route one keydown; true if the event was consumed
    pub fn dispatch(
        &mut self,
        doc: &mut Document,
        host: &mut dyn NavigationHost,
        event: &mut KeyEvent,
    ) -> bool {
        if event.phase != KeyPhase::Down {
            return false;
        }
        // Reserved browser shortcuts pass through untouched
        if event.meta || event.ctrl {
            return false;
        }
        let Key::Char(ch) = event.key else {
            return false;
        };
        // Typing into a free-text field takes precedence
        let active = doc.active_element();
        if active.is_valid() && host.is_free_text_field(doc, active) {
            return false;
        }

        let canonical = ch.to_ascii_lowercase();
        let Some(binding) = self.registry.get_mut(canonical) else {
            return false;
        };
        let node = if ch == canonical {
            binding.list_mut().next()
        } else {
            // Uppercase form of a registered key retreats
            binding.list_mut().previous()
        };

        match node {
            Some(node) => {
                self.last_wrap = binding.list().wrap();
                tracing::trace!(trigger = %canonical, ?node, wrap = ?self.last_wrap, "quick key");
                match &mut self.action {
                    Some(action) => action(doc, node, event),
                    None => host.move_focus(doc, node),
                }
                event.prevent_default();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestHost {
        moved: Vec<NodeId>,
    }

    impl TestHost {
        fn new() -> Self {
            Self { moved: Vec::new() }
        }
    }

    impl NavigationHost for TestHost {
        fn navigation_active(&self) -> bool {
            true
        }

        fn is_free_text_field(&self, doc: &Document, node: NodeId) -> bool {
            matches!(doc.tree().tag_name(node), Some("input") | Some("textarea"))
        }

        fn move_focus(&mut self, doc: &mut Document, node: NodeId) {
            doc.focus(node);
            self.moved.push(node);
        }
    }

    fn heading_doc() -> Document {
        vox_html::parse(
            "<h1>one</h1><p>x</p><h2>two</h2><a href='/'>link</a><h3>three</h3>",
        )
    }

    fn test_map() -> KeyMap {
        KeyMap::empty()
            .bind('h', "h1, h2, h3")
            .bind('l', "a")
            .bind('z', "foo")
    }

    #[test]
    fn test_registry_drops_unmatched_and_blank() {
        let doc = heading_doc();
        let map = test_map().bind('x', "   ");
        let registry = KeyRegistry::build(&map, doc.tree(), doc.body());

        assert_eq!(registry.len(), 2);
        assert!(registry.contains('h'));
        assert!(registry.contains('l'));
        assert!(!registry.contains('z'));
        assert!(!registry.contains('x'));
    }

    #[test]
    fn test_trigger_canonicalized() {
        let doc = heading_doc();
        let map = KeyMap::empty().bind('H', "h1");
        let registry = KeyRegistry::build(&map, doc.tree(), doc.body());

        assert!(registry.contains('h'));
        assert!(!registry.contains('H'));
    }

    #[test]
    fn test_lowercase_advances_in_document_order() {
        let mut doc = heading_doc();
        let mut mgr = QuickKeyManager::new(&test_map(), &doc, doc.body());
        let mut host = TestHost::new();

        let mut ev = KeyEvent::char('h');
        assert!(mgr.dispatch(&mut doc, &mut host, &mut ev));
        assert!(ev.default_prevented());
        assert_eq!(doc.tree().tag_name(doc.active_element()), Some("h1"));
        assert_eq!(mgr.last_wrap(), WrapMarker::None);

        let mut ev = KeyEvent::char('h');
        mgr.dispatch(&mut doc, &mut host, &mut ev);
        assert_eq!(doc.tree().tag_name(doc.active_element()), Some("h2"));
    }

    #[test]
    fn test_uppercase_before_any_press_wraps_to_end() {
        let mut doc = heading_doc();
        let mut mgr = QuickKeyManager::new(&test_map(), &doc, doc.body());
        let mut host = TestHost::new();

        let mut ev = KeyEvent::char('H');
        assert!(mgr.dispatch(&mut doc, &mut host, &mut ev));
        assert_eq!(doc.tree().tag_name(doc.active_element()), Some("h3"));
        assert_eq!(mgr.last_wrap(), WrapMarker::End);
    }

    #[test]
    fn test_full_cycle_reports_start_wrap() {
        let mut doc = heading_doc();
        let mut mgr = QuickKeyManager::new(&test_map(), &doc, doc.body());
        let mut host = TestHost::new();

        for _ in 0..3 {
            let mut ev = KeyEvent::char('h');
            mgr.dispatch(&mut doc, &mut host, &mut ev);
            assert_eq!(mgr.last_wrap(), WrapMarker::None);
        }
        let mut ev = KeyEvent::char('h');
        mgr.dispatch(&mut doc, &mut host, &mut ev);
        assert_eq!(doc.tree().tag_name(doc.active_element()), Some("h1"));
        assert_eq!(mgr.last_wrap(), WrapMarker::Start);
    }

    #[test]
    fn test_reserved_modifiers_pass_through() {
        let mut doc = heading_doc();
        let mut mgr = QuickKeyManager::new(&test_map(), &doc, doc.body());
        let mut host = TestHost::new();

        let mut ev = KeyEvent::char('h').with_meta();
        assert!(!mgr.dispatch(&mut doc, &mut host, &mut ev));
        assert!(!ev.default_prevented());

        let mut ev = KeyEvent::char('h').with_ctrl();
        assert!(!mgr.dispatch(&mut doc, &mut host, &mut ev));
        assert!(host.moved.is_empty());
    }

    #[test]
    fn test_free_text_field_suppresses_shortcuts() {
        let mut doc = vox_html::parse("<h1>one</h1><input type='text'>");
        let mut mgr = QuickKeyManager::new(&test_map(), &doc, doc.body());
        let mut host = TestHost::new();

        let input = doc
            .tree()
            .descendants(doc.body())
            .find(|(id, _)| doc.tree().tag_name(*id) == Some("input"))
            .map(|(id, _)| id)
            .unwrap();
        doc.focus(input);

        let mut ev = KeyEvent::char('h');
        assert!(!mgr.dispatch(&mut doc, &mut host, &mut ev));
        assert!(!ev.default_prevented());
        assert_eq!(doc.active_element(), input);
    }

    #[test]
    fn test_unregistered_key_is_noop() {
        let mut doc = heading_doc();
        let mut mgr = QuickKeyManager::new(&test_map(), &doc, doc.body());
        let mut host = TestHost::new();

        let mut ev = KeyEvent::char('q');
        assert!(!mgr.dispatch(&mut doc, &mut host, &mut ev));
        assert!(!ev.default_prevented());
        assert!(host.moved.is_empty());
    }

    #[test]
    fn test_custom_action_replaces_move_focus() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut doc = heading_doc();
        let seen: Rc<RefCell<Vec<NodeId>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut mgr = QuickKeyManager::with_action(
            &test_map(),
            &doc,
            doc.body(),
            Box::new(move |_doc, node, _event| sink.borrow_mut().push(node)),
        );
        let mut host = TestHost::new();

        let mut ev = KeyEvent::char('l');
        assert!(mgr.dispatch(&mut doc, &mut host, &mut ev));
        assert_eq!(seen.borrow().len(), 1);
        assert!(host.moved.is_empty());
        assert!(!doc.active_element().is_valid());
    }

    #[test]
    fn test_keyup_not_dispatched() {
        let mut doc = heading_doc();
        let mut mgr = QuickKeyManager::new(&test_map(), &doc, doc.body());
        let mut host = TestHost::new();

        let mut ev = KeyEvent::up(Key::Char('h'));
        assert!(!mgr.dispatch(&mut doc, &mut host, &mut ev));
    }
}
