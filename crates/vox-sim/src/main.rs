//! vox demo - Keyboard exploration transcript
//!
//! Loads an HTML page, runs a scripted key sequence through a
//! simulation session, and prints where focus lands after each key.

use anyhow::{bail, Context, Result};
use vox_a11y::{Key, KeyEvent};
use vox_dom::{Document, DomTree, NodeId};
use vox_sim::{Session, SimConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut path = None;
    let mut keys = String::new();
    let mut config_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--keys" => keys = args.next().context("--keys needs a value")?,
            "--config" => config_path = Some(args.next().context("--config needs a value")?),
            _ => path = Some(arg),
        }
    }
    let path = path.context(
        "usage: vox <page.html> [--keys \"h h H ArrowRight Tab\"] [--config keys.json]",
    )?;

    let doc = vox_html::parse_file(&path).context("loading page")?;
    let config = match config_path {
        Some(p) => SimConfig::load(&p).context("loading config")?,
        None => SimConfig::default(),
    };

    let mut session = Session::new(doc, config);
    println!(
        "{}: {} navigable elements, {} given a synthetic tabindex",
        path,
        session.navigable_len(),
        session.tab_index_node_count()
    );

    for tok in keys.split_whitespace() {
        let Some(mut event) = parse_token(tok) else {
            bail!("unrecognized key token: {tok}");
        };
        if event.key == Key::Tab {
            // Stand in for the host's native tab order, then let the
            // session re-synchronize on keyup.
            native_tab(session.document_mut(), event.shift);
            session.key_up(&KeyEvent::up(Key::Tab));
        } else {
            session.key_down(&mut event);
        }
        println!("{tok:>12} -> {}", describe(session.document(), session.focused()));
    }

    Ok(())
}

/// Parse one key token: a named key or a single character
fn parse_token(tok: &str) -> Option<KeyEvent> {
    let key = match tok {
        "ArrowLeft" => Key::ArrowLeft,
        "ArrowRight" => Key::ArrowRight,
        "ArrowUp" => Key::ArrowUp,
        "ArrowDown" => Key::ArrowDown,
        "Tab" => Key::Tab,
        "Enter" => Key::Enter,
        "Escape" => Key::Escape,
        _ => {
            let mut chars = tok.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            return Some(KeyEvent::char(ch));
        }
    };
    Some(KeyEvent::down(key))
}

/// Move focus the way the host's native tab order would
fn native_tab(doc: &mut Document, back: bool) {
    let order: Vec<NodeId> = doc
        .tree()
        .descendants(doc.tree().root())
        .filter(|(id, node)| node.is_element() && is_tabbable(doc.tree(), *id))
        .map(|(id, _)| id)
        .collect();
    if order.is_empty() {
        return;
    }

    let pos = order.iter().position(|&n| n == doc.active_element());
    let target = match (pos, back) {
        (Some(p), false) => order[(p + 1) % order.len()],
        (Some(p), true) => order[(p + order.len() - 1) % order.len()],
        (None, false) => order[0],
        (None, true) => order[order.len() - 1],
    };
    doc.focus(target);
}

/// Natively tabbable: explicit non-negative tabindex, or a focusable tag
fn is_tabbable(tree: &DomTree, id: NodeId) -> bool {
    const TAGS: &[&str] = &["a", "button", "input", "select", "textarea", "summary", "iframe"];
    match tree.attribute(id, "tabindex").and_then(|v| v.parse::<i32>().ok()) {
        Some(n) => n >= 0,
        None => tree.tag_name(id).is_some_and(|t| TAGS.contains(&t)),
    }
}

/// Short human-readable description of a node
fn describe(doc: &Document, node: NodeId) -> String {
    if !node.is_valid() {
        return "(nothing focused)".to_string();
    }
    let tree = doc.tree();
    let tag = tree.tag_name(node).unwrap_or("?");

    let mut text = String::new();
    for (_, n) in tree.descendants(node) {
        if let Some(t) = n.as_text() {
            let t = t.trim();
            if !t.is_empty() {
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(t);
            }
        }
        if text.len() > 40 {
            break;
        }
    }

    if text.is_empty() {
        format!("<{tag}>")
    } else {
        format!("<{tag}> {text:.40}")
    }
}
