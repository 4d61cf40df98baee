//! Nested style specifications.
//!
//! A template's content is either one [`StyleEntry`] or an ordered group of
//! nodes, and groups may nest to any depth. Composite templates are built by
//! grouping the content of other templates, so nesting shows up naturally.

use serde::{Deserialize, Serialize};

use super::entry::StyleEntry;

/// A style specification tree: a single entry or an ordered group.
///
/// Serialized as an object (entry) or an array (group), matching how hosts
/// write them by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleNode {
    /// An ordered group of nodes.
    Group(Vec<StyleNode>),
    /// A single concrete entry.
    Entry(StyleEntry),
}

impl StyleNode {
    /// Iterates every entry depth-first, left to right.
    ///
    /// A bare entry yields itself, exactly like a one-element group.
    pub fn entries(&self) -> Entries<'_> {
        match self {
            StyleNode::Entry(entry) => Entries {
                single: Some(entry),
                stack: Vec::new(),
            },
            StyleNode::Group(children) => Entries {
                single: None,
                stack: vec![children.iter()],
            },
        }
    }

    /// Number of entries the node flattens to.
    pub fn entry_count(&self) -> usize {
        self.entries().count()
    }
}

impl From<StyleEntry> for StyleNode {
    fn from(entry: StyleEntry) -> Self {
        StyleNode::Entry(entry)
    }
}

impl From<Vec<StyleNode>> for StyleNode {
    fn from(nodes: Vec<StyleNode>) -> Self {
        StyleNode::Group(nodes)
    }
}

impl From<Vec<StyleEntry>> for StyleNode {
    fn from(entries: Vec<StyleEntry>) -> Self {
        StyleNode::Group(entries.into_iter().map(StyleNode::Entry).collect())
    }
}

/// Depth-first iterator over the entries of a [`StyleNode`].
///
/// Uses an explicit stack so deeply nested groups don't grow the call stack.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    single: Option<&'a StyleEntry>,
    stack: Vec<std::slice::Iter<'a, StyleNode>>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a StyleEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(entry) = self.single.take() {
            return Some(entry);
        }
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(StyleNode::Entry(entry)) => return Some(entry),
                Some(StyleNode::Group(children)) => self.stack.push(children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}
