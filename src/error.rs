//! ## Errors
//! All fallible operations of the library report a [TrieError].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrieError {
    /// A word or prefix is not stored in the trie.
    #[error("no match for '{query}'")]
    SearchMiss { query: String },

    /// The dictionary backing the trie could not be opened.
    #[error("dictionary {path:?} is unavailable: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line of an opened dictionary could not be read, e.g. because it is not valid UTF-8.
    #[error("{path:?} line {line} is unreadable: {source}")]
    UnreadableLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: frequency '{value}' of '{word}' is not a number")]
    InvalidFrequency {
        line: usize,
        word: String,
        value: String,
    },

    #[error("line {line}: expected `word [frequency]`, found {fields} fields")]
    MalformedLine { line: usize, fields: usize },
}

impl TrieError {
    pub(crate) fn miss(query: &str) -> Self {
        TrieError::SearchMiss {
            query: query.to_string(),
        }
    }

    /// Whether this is a recoverable lookup miss as opposed to a broken dictionary.
    pub fn is_miss(&self) -> bool {
        matches!(self, TrieError::SearchMiss { .. })
    }
}
