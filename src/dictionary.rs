//! ## Dictionary
//! Reads word lists into [Entry] records. A dictionary is plain text with one entry per line,
//! either `word` or `word frequency`, fields separated by whitespace. Blank lines are skipped, any
//! other deviation rejects the whole dictionary.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};
use rustc_hash::FxHashSet;

use crate::error::TrieError;
use crate::node::UNRANKED;

/// A single dictionary line.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub word: String,
    pub frequency: f64,
}

impl Entry {
    pub fn new(word: impl Into<String>, frequency: f64) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }

    pub fn unranked(word: impl Into<String>) -> Self {
        Self::new(word, UNRANKED)
    }
}

/// Parse line number `line_no` (1-based, used for error reporting only).
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Entry>, TrieError> {
    let fields = line.split_whitespace().collect::<Vec<_>>();
    match fields.as_slice() {
        [] => Ok(None),
        [word] => Ok(Some(Entry::unranked(*word))),
        [word, value] => {
            let invalid = || TrieError::InvalidFrequency {
                line: line_no,
                word: word.to_string(),
                value: value.to_string(),
            };
            // `nan` and `inf` parse as f64 but are no frequencies
            let frequency = value.parse::<f64>().map_err(|_| invalid())?;
            if !frequency.is_finite() {
                return Err(invalid());
            }
            Ok(Some(Entry::new(*word, frequency)))
        }
        _ => Err(TrieError::MalformedLine {
            line: line_no,
            fields: fields.len(),
        }),
    }
}

/// Parse every line of `reader`. `path` only names the source in errors.
pub fn read_entries(reader: impl BufRead, path: &Path) -> Result<Vec<Entry>, TrieError> {
    let mut entries = Vec::new();
    let mut seen = FxHashSet::default();
    let mut duplicates = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| TrieError::UnreadableLine {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        if let Some(entry) = parse_line(idx + 1, &line)? {
            if !seen.insert(entry.word.clone()) {
                duplicates += 1;
            }
            entries.push(entry);
        }
    }
    if duplicates > 0 {
        warn!(
            "{:?} lists {} words more than once, keeping the last frequency",
            path, duplicates
        );
    }
    Ok(entries)
}

/// Read the dictionary file at `path`.
pub fn load(path: &Path) -> Result<Vec<Entry>, TrieError> {
    info!("Opening {:?}", path);
    let file = File::open(path).map_err(|source| TrieError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = read_entries(BufReader::new(file), path)?;
    info!("Read {} entries from {:?}", entries.len(), path);
    Ok(entries)
}

#[cfg(test)]
mod test {
    use std::io::Cursor;
    use std::path::Path;

    use super::{Entry, parse_line, read_entries};
    use crate::error::TrieError;

    #[test]
    fn parse_line_shapes() {
        assert_eq!(parse_line(1, "").unwrap(), None);
        assert_eq!(parse_line(1, "   \t").unwrap(), None);
        assert_eq!(parse_line(1, "apple").unwrap(), Some(Entry::unranked("apple")));
        assert_eq!(
            parse_line(1, "apple 100.9").unwrap(),
            Some(Entry::new("apple", 100.9))
        );
        assert_eq!(
            parse_line(1, "  apple\t42 ").unwrap(),
            Some(Entry::new("apple", 42.0))
        );
    }

    #[test]
    fn parse_line_rejects_bad_frequency() {
        match parse_line(7, "apple lots") {
            Err(TrieError::InvalidFrequency { line, word, value }) => {
                assert_eq!(line, 7);
                assert_eq!(word, "apple");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parse_line_rejects_non_finite() {
        for value in ["nan", "NaN", "inf", "-inf", "infinity"] {
            let line = format!("cat {}", value);
            assert!(
                matches!(
                    parse_line(2, &line),
                    Err(TrieError::InvalidFrequency { line: 2, .. })
                ),
                "{} accepted",
                value
            );
        }
        let err = read_entries(Cursor::new("car 80\ncat nan\n"), Path::new("inline")).unwrap_err();
        assert!(matches!(err, TrieError::InvalidFrequency { line: 2, .. }));
    }

    #[test]
    fn read_entries_rejects_invalid_utf8() {
        let input = Cursor::new(b"cat 1\n\xff\xfe 2\n".to_vec());
        match read_entries(input, Path::new("inline")) {
            Err(TrieError::UnreadableLine { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parse_line_rejects_extra_fields() {
        assert!(matches!(
            parse_line(3, "apple 1 2"),
            Err(TrieError::MalformedLine { line: 3, fields: 3 })
        ));
    }

    #[test]
    fn read_entries_keeps_duplicates_in_order() {
        let input = Cursor::new("cat 1\n\ndog\ncat 2\n");
        let entries = read_entries(input, Path::new("inline")).unwrap();
        assert_eq!(
            entries,
            vec![
                Entry::new("cat", 1.0),
                Entry::unranked("dog"),
                Entry::new("cat", 2.0)
            ]
        );
    }

    #[test]
    fn read_entries_reports_line_number() {
        let input = Cursor::new("cat 1\ndog 2\nbird x\n");
        let err = read_entries(input, Path::new("inline")).unwrap_err();
        assert!(matches!(err, TrieError::InvalidFrequency { line: 3, .. }));
        assert!(!err.is_miss());
    }
}
