//! Example: Basic keyboard exploration of an in-memory page

use vox_a11y::KeyEvent;
use vox_sim::{Session, SimConfig};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let doc = vox_html::parse(
        "<h1>Welcome</h1>\
         <p>Some intro text.</p>\
         <h2>Links</h2>\
         <a href='/a'>First</a>\
         <a href='/b'>Second</a>",
    );

    let mut session = Session::new(doc, SimConfig::default());
    println!(
        "{} navigable elements, {} given a synthetic tabindex",
        session.navigable_len(),
        session.tab_index_node_count()
    );

    // h cycles headings, H retreats, k cycles links
    for key in ['h', 'h', 'H', 'k'] {
        let mut ev = KeyEvent::char(key);
        session.key_down(&mut ev);
        let tag = session.document().tree().tag_name(session.focused());
        println!("{key} -> {tag:?} (wrap: {:?})", session.last_wrap());
    }
}
