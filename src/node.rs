//! ## Node
//! A single vertex of the [Trie](crate::trie::Trie).

use std::collections::{BTreeMap, btree_map};

/// Frequency of words that were stored without one.
pub const UNRANKED: f64 = -1.0;

/// One character position in the trie. The node owns its children, so dropping a node drops the
/// whole subtree below it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    // `None` only for the root.
    pub(crate) label: Option<char>,
    pub(crate) is_word: bool,
    pub(crate) frequency: f64,
    pub(crate) children: BTreeMap<char, Box<Node>>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self::new(None)
    }

    pub(crate) fn new(label: Option<char>) -> Self {
        Self {
            label,
            is_word: false,
            frequency: UNRANKED,
            children: BTreeMap::new(),
        }
    }

    /// The character on the edge leading into this node, `None` for the root.
    pub fn label(&self) -> Option<char> {
        self.label
    }

    /// Whether the path from the root to this node spells a stored word.
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Frequency of the word ending here. Only meaningful if [Node::is_word] holds.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn get_child(&self, c: char) -> Option<&Node> {
        self.children.get(&c).map(|v| &**v)
    }

    pub fn iter_children(&self) -> btree_map::Iter<'_, char, Box<Node>> {
        self.children.iter()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes in the subtree rooted here, including `self`.
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut worklist = vec![self];
        while let Some(node) = worklist.pop() {
            count += 1;
            worklist.extend(node.children.values().map(|c| &**c));
        }
        count
    }
}
