//! Element queries
//!
//! Simple selectors (tag, #id, .class, *) and comma-separated
//! selector lists, matched in document order.

use crate::{DomTree, ElementData, NodeId};

/// Simple selector for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Tag(String),
    Class(String),
    Id(String),
    Universal,
}

impl SimpleSelector {
    /// Parse a simple selector string
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if s == "*" {
            Some(Self::Universal)
        } else if let Some(id) = s.strip_prefix('#') {
            Some(Self::Id(id.to_string()))
        } else if let Some(class) = s.strip_prefix('.') {
            Some(Self::Class(class.to_string()))
        } else {
            Some(Self::Tag(s.to_ascii_lowercase()))
        }
    }

    /// Check an element against this selector
    pub fn matches(&self, elem: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(tag) => elem.name == *tag,
            Self::Id(id) => elem.id.as_deref() == Some(id),
            Self::Class(class) => elem.has_class(class),
        }
    }
}

/// Comma-separated list of simple selectors ("h1, h2, h3")
///
/// An element matches the list if it matches any member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    selectors: Vec<SimpleSelector>,
}

impl SelectorList {
    /// Parse a selector list; None if nothing parseable remains
    pub fn parse(s: &str) -> Option<Self> {
        let selectors: Vec<SimpleSelector> =
            s.split(',').filter_map(SimpleSelector::parse).collect();
        if selectors.is_empty() {
            None
        } else {
            Some(Self { selectors })
        }
    }

    /// Check an element against the list
    pub fn matches(&self, elem: &ElementData) -> bool {
        self.selectors.iter().any(|sel| sel.matches(elem))
    }

    /// All matching elements under `root`, in document order
    pub fn query_all(&self, tree: &DomTree, root: NodeId) -> Vec<NodeId> {
        tree.descendants(root)
            .filter(|(_, node)| node.as_element().is_some_and(|e| self.matches(e)))
            .map(|(id, _)| id)
            .collect()
    }
}
