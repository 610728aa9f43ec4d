//! ## Trie
//! Contains the [trie](https://en.wikipedia.org/wiki/Trie) backing the spellchecker. Words are
//! stored character by character, words with a common prefix share the nodes of that prefix and
//! every complete word carries a frequency used to rank autocompletion results.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::Path;

use log::debug;

use crate::dictionary::{self, Entry};
use crate::error::TrieError;
use crate::node::{Node, UNRANKED};

/// Maximum number of suggestions returned by [Trie::auto_complete].
pub const MAX_SUGGESTIONS: usize = 10;

#[derive(Debug, Clone)]
pub struct Trie {
    root: Node,
    words: usize,
}

impl Trie {
    /// Create a new empty trie.
    pub fn new() -> Self {
        Self {
            root: Node::root(),
            words: 0,
        }
    }

    /// Build a trie from the dictionary file at `path`, see [dictionary::load] for the format.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TrieError> {
        let entries = dictionary::load(path.as_ref())?;
        Ok(Self::from_entries(entries))
    }

    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut trie = Self::new();
        for entry in entries {
            trie.add_word(&entry.word, entry.frequency);
        }
        trie
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes in the trie, the root included.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    /// Store `word` with `frequency`. Adding a word that is already present only replaces its
    /// frequency.
    pub fn add_word(&mut self, word: &str, frequency: f64) {
        let mut current = &mut self.root;
        for c in word.chars() {
            current = &mut **current
                .children
                .entry(c)
                .or_insert_with(|| Box::new(Node::new(Some(c))));
        }
        if !current.is_word {
            current.is_word = true;
            self.words += 1;
        }
        current.frequency = frequency;
    }

    /// Look up `word`, returning the nodes visited from the root up to and including the node the
    /// word ends in.
    pub fn is_word(&self, word: &str) -> Result<Vec<&Node>, TrieError> {
        let mut current = &self.root;
        let mut path = vec![current];
        for c in word.chars() {
            current = current.get_child(c).ok_or_else(|| TrieError::miss(word))?;
            path.push(current);
        }
        if !current.is_word {
            return Err(TrieError::miss(word));
        }
        Ok(path)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.is_word(word).is_ok()
    }

    /// The (at most [MAX_SUGGESTIONS]) most frequent words starting with `prefix`.
    pub fn auto_complete(&self, prefix: &str) -> Result<Vec<(String, f64)>, TrieError> {
        self.complete(prefix, MAX_SUGGESTIONS)
    }

    /// The `limit` most frequent words starting with `prefix`, ordered by descending frequency.
    /// Words of equal frequency are ordered alphabetically. Fails if no stored word starts with
    /// `prefix`.
    pub fn complete(&self, prefix: &str, limit: usize) -> Result<Vec<(String, f64)>, TrieError> {
        let node = self.walk(prefix).ok_or_else(|| TrieError::miss(prefix))?;
        let mut ranked = Self::get_words(node, prefix)
            .into_iter()
            .collect::<Vec<_>>();
        ranked.sort_by(by_frequency);
        ranked.truncate(limit);
        debug!("Completed '{}' to {} words", prefix, ranked.len());
        Ok(ranked)
    }

    /// Collect every word in the subtree below `node`, where `prefix` spells the path to `node`.
    pub fn get_words(node: &Node, prefix: &str) -> BTreeMap<String, f64> {
        let mut words = BTreeMap::new();
        let mut worklist = vec![(node, prefix.to_string())];
        while let Some((node, spelled)) = worklist.pop() {
            for (c, child) in node.iter_children() {
                let mut next = spelled.clone();
                next.push(*c);
                worklist.push((child, next));
            }
            if node.is_word {
                words.insert(spelled, node.frequency);
            }
        }
        words
    }

    /// Every stored word with its frequency, in alphabetical order.
    pub fn all_words(&self) -> BTreeMap<String, f64> {
        Self::get_words(&self.root, "")
    }

    /// Remove `word` and every node that only existed for it. The root is always kept.
    pub fn delete_word(&mut self, word: &str) -> Result<(), TrieError> {
        let cut = prune_depth(&self.is_word(word)?);
        let chars = word.chars().collect::<Vec<_>>();
        match cut {
            Some(depth) => {
                let parent = self
                    .walk_mut(&chars[..depth - 1])
                    .ok_or_else(|| TrieError::miss(word))?;
                parent.children.remove(&chars[depth - 1]);
                debug!("Deleted '{}', pruned {} nodes", word, chars.len() + 1 - depth);
            }
            None => {
                let terminal = self.walk_mut(&chars).ok_or_else(|| TrieError::miss(word))?;
                terminal.is_word = false;
                terminal.frequency = UNRANKED;
                debug!("Deleted '{}', nothing to prune", word);
            }
        }
        self.words -= 1;
        Ok(())
    }

    fn walk(&self, prefix: &str) -> Option<&Node> {
        let mut current = &self.root;
        for c in prefix.chars() {
            current = current.get_child(c)?;
        }
        Some(current)
    }

    fn walk_mut(&mut self, chars: &[char]) -> Option<&mut Node> {
        let mut current = &mut self.root;
        for c in chars {
            current = &mut **current.children.get_mut(c)?;
        }
        Some(current)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Entry> for Trie {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

// Walks the path of a word about to be deleted backwards and returns the depth of the shallowest
// node that becomes useless once the word is gone. Everything from that node downwards hangs off
// a single edge, so detaching it from its parent removes the whole chain.
fn prune_depth(path: &[&Node]) -> Option<usize> {
    let terminal = path.len() - 1;
    if terminal == 0 || path[terminal].has_children() {
        return None;
    }
    let mut depth = terminal;
    while depth > 1 {
        let parent = path[depth - 1];
        if parent.is_word || parent.children.len() > 1 {
            break;
        }
        depth -= 1;
    }
    Some(depth)
}

fn by_frequency(lhs: &(String, f64), rhs: &(String, f64)) -> Ordering {
    rhs.1.total_cmp(&lhs.1).then_with(|| lhs.0.cmp(&rhs.0))
}
