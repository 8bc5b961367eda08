//! End-to-end navigation over parsed pages

use vox_a11y::{Key, KeyEvent, WrapMarker};
use vox_sim::{Session, SimConfig};

const PAGE: &str = r#"
<html><body>
  <header><h1>Site</h1></header>
  <nav>
    <a href="/">Home</a>
    <a href="/docs">Docs</a>
  </nav>
  <main>
    <h2>Intro</h2>
    <p>Welcome text.</p>
    <div>
      <span>decoration</span>
    </div>
    <h2 style="display: none">Draft</h2>
    <form>
      <label>Search</label>
      <input type="search">
      <button>Go</button>
    </form>
  </main>
</body></html>
"#;

fn page_session() -> Session {
    Session::new(vox_html::parse(PAGE), SimConfig::default())
}

#[test]
fn test_arrow_walk_visits_document_order() {
    let mut s = page_session();
    let n = s.navigable_len();
    assert!(n > 5);

    // Walk the whole set; every stop is a distinct focused element
    let mut seen = Vec::new();
    for _ in 0..n {
        let mut ev = KeyEvent::down(Key::ArrowRight);
        s.key_down(&mut ev);
        assert!(ev.default_prevented());
        seen.push(s.focused());
    }
    seen.dedup();
    assert_eq!(seen.len(), n);

    // One more wraps back to the first stop
    let mut ev = KeyEvent::down(Key::ArrowRight);
    s.key_down(&mut ev);
    assert_eq!(s.focused(), seen[0]);
}

#[test]
fn test_hidden_and_bare_containers_skipped() {
    let s = page_session();
    let tree = s.document().tree();

    for &id in s.navigator().list().items() {
        let tag = tree.tag_name(id).unwrap();
        assert_ne!(tag, "div", "bare container joined the set");
        if tag == "h2" {
            assert_ne!(tree.attribute(id, "style"), Some("display: none"));
        }
    }
}

#[test]
fn test_quick_key_registry_contents() {
    // h and l resolve, z matches nothing and is dropped
    let config = SimConfig {
        quick_keys: vox_a11y::KeyMap::empty()
            .bind('h', "h1, h2, h3")
            .bind('l', "a")
            .bind('z', "foo"),
        ..SimConfig::default()
    };
    let s = Session::new(vox_html::parse(PAGE), config);

    let registry = s.quick_keys().registry();
    assert_eq!(registry.len(), 2);
    assert!(registry.contains('h'));
    assert!(registry.contains('l'));
    assert!(!registry.contains('z'));
}

#[test]
fn test_heading_cycle_with_shift_reverse() {
    let mut s = page_session();

    // First press: first heading in document order
    let mut ev = KeyEvent::char('h');
    s.key_down(&mut ev);
    let first = s.focused();
    assert_eq!(s.document().tree().tag_name(first), Some("h1"));
    assert_eq!(s.last_wrap(), WrapMarker::None);

    // Uppercase retreats, wrapping back to the last heading in the
    // selector snapshot. Quick-key lists are built by selector alone,
    // so the display:none draft heading is a member.
    let mut ev = KeyEvent::char('H');
    s.key_down(&mut ev);
    assert_eq!(s.document().tree().tag_name(s.focused()), Some("h2"));
    assert_eq!(
        s.document().tree().attribute(s.focused(), "style"),
        Some("display: none")
    );
    assert_eq!(s.last_wrap(), WrapMarker::End);
}

#[test]
fn test_uppercase_first_reports_end_wrap() {
    let mut s = page_session();

    let mut ev = KeyEvent::char('H');
    s.key_down(&mut ev);
    assert_eq!(s.last_wrap(), WrapMarker::End);
    assert_eq!(s.document().tree().tag_name(s.focused()), Some("h2"));
}

#[test]
fn test_typing_in_search_box_wins_over_shortcuts() {
    let mut s = page_session();
    let input = {
        let tree = s.document().tree();
        tree.descendants(s.document().body())
            .find(|(id, _)| tree.tag_name(*id) == Some("input"))
            .map(|(id, _)| id)
            .unwrap()
    };
    s.document_mut().focus(input);

    let mut ev = KeyEvent::char('h');
    s.key_down(&mut ev);
    assert!(!ev.default_prevented());
    assert_eq!(s.focused(), input);

    // Shortcuts work again once focus leaves the field
    s.document_mut().blur();
    let mut ev = KeyEvent::char('h');
    s.key_down(&mut ev);
    assert_eq!(s.document().tree().tag_name(s.focused()), Some("h1"));
}

#[test]
fn test_meta_chord_passes_through() {
    let mut s = page_session();

    let mut ev = KeyEvent::char('l').with_meta();
    s.key_down(&mut ev);
    assert!(!ev.default_prevented());
    assert!(!s.focused().is_valid());
}

#[test]
fn test_tab_resync_then_arrow_continues() {
    let mut s = page_session();
    let items = s.navigator().list().items().to_vec();
    let tree_pos = |s: &Session, tag: &str| {
        items
            .iter()
            .position(|&id| s.document().tree().tag_name(id) == Some(tag))
            .unwrap()
    };

    // Native tab put focus on the second link
    let docs_link = items[tree_pos(&s, "a") + 1];
    s.document_mut().focus(docs_link);
    s.key_up(&KeyEvent::up(Key::Tab));

    // Arrow picks up from the tabbed position
    let mut ev = KeyEvent::down(Key::ArrowRight);
    s.key_down(&mut ev);
    let expected = items[items.iter().position(|&i| i == docs_link).unwrap() + 1];
    assert_eq!(s.focused(), expected);
}

#[test]
fn test_interactive_stepping_over_page() {
    let mut s = page_session();

    let tags = vec!["a", "a", "input", "button", "a"];
    let mut walked = Vec::new();
    for _ in 0..5 {
        let node = s.next_interactive().unwrap();
        walked.push(s.document().tree().tag_name(node).unwrap().to_string());
    }
    assert_eq!(walked, tags);
}

#[test]
fn test_empty_page_is_a_normal_state() {
    let mut s = Session::new(vox_html::parse("<script>1</script>"), SimConfig::default());

    assert_eq!(s.navigable_len(), 0);
    let mut ev = KeyEvent::down(Key::ArrowRight);
    s.key_down(&mut ev);
    assert!(!ev.default_prevented());
    assert!(!s.focused().is_valid());

    let mut ev = KeyEvent::char('h');
    s.key_down(&mut ev);
    assert!(!ev.default_prevented());
}
