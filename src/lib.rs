//! # Spellcheck
//! This library contains a trie based word lookup engine for a small interactive spellchecker.
//! [trie::Trie] answers membership queries, ranks prefix completions by frequency and deletes
//! words while keeping the tree minimal. [dictionary] reads word lists into the trie and [menu]
//! drives the interactive session.

pub mod dictionary;
pub mod error;
pub mod menu;
pub mod node;
pub mod trie;
