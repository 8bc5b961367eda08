//! Tag classification policy
//!
//! Three-way classification driving navigable-set membership:
//! natively focusable tags, always-marked content tags, and generic
//! containers that qualify only by role or direct text content.

use serde::{Deserialize, Serialize};

/// Immutable tag classification tables, fixed at construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavPolicy {
    /// Natively focusable: joins the set, never needs a synthetic tabindex
    pub focusable_tags: Vec<String>,
    /// Content and landmark tags: always join the set
    pub marked_tags: Vec<String>,
    /// Generic containers: join only with a role or direct text
    pub container_tags: Vec<String>,
}

impl NavPolicy {
    pub fn is_focusable_tag(&self, tag: &str) -> bool {
        self.focusable_tags.iter().any(|t| t == tag)
    }

    pub fn is_marked_tag(&self, tag: &str) -> bool {
        self.marked_tags.iter().any(|t| t == tag)
    }

    pub fn is_container_tag(&self, tag: &str) -> bool {
        self.container_tags.iter().any(|t| t == tag)
    }
}

impl Default for NavPolicy {
    fn default() -> Self {
        let strings = |tags: &[&str]| tags.iter().map(|t| t.to_string()).collect();
        Self {
            focusable_tags: strings(&[
                "a", "button", "input", "select", "textarea", "summary", "iframe",
            ]),
            marked_tags: strings(&[
                "h1", "h2", "h3", "h4", "h5", "h6", "p", "blockquote", "pre", "label",
                "ul", "ol", "li", "dl", "dt", "dd", "img", "figure", "figcaption",
                "audio", "video", "table", "caption", "tr", "td", "th", "main", "nav",
                "header", "footer", "aside", "section", "article",
            ]),
            container_tags: strings(&["div", "span"]),
        }
    }
}
