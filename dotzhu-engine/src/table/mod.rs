//! Static cell-sequence lookup tables.
//!
//! Entries map sequences of one or more cells to an output payload. The
//! trie answers three-way: an exact entry exists (`Complete`, with a flag
//! for whether a longer entry shares the prefix), only longer entries exist
//! (`Prefix`), or no entry can ever match (`Miss`). Table contents are
//! fixed domain data; nothing is added or removed at runtime.

mod ascii;
mod chinese;
mod hotkeys;

pub use ascii::ascii_char;
pub use chinese::chinese_table;
pub use hotkeys::{ExternalCommand, HotkeyAction, hotkey_for_chord};

use std::collections::HashMap;

use crate::cell::Cell;

/// How a payload participates in composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// Bopomofo symbols; the syllable continues.
    Phonetic,
    /// A tone mark; terminates the syllable.
    Tone,
    /// A literal character (punctuation, Greek letter): replaces any
    /// pending phonetic input and completes immediately.
    Literal,
}

/// Output bound to a complete table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub text: String,
    pub kind: PayloadKind,
}

impl Payload {
    pub fn phonetic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: PayloadKind::Phonetic,
        }
    }

    pub fn tone(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: PayloadKind::Tone,
        }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: PayloadKind::Literal,
        }
    }

    /// Payload length in characters; retractions are counted in these.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Result of matching a cell sequence against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellMatch<'a> {
    /// An exact entry exists. `extendable` is statically known: a longer
    /// entry starts with this sequence.
    Complete {
        payload: &'a Payload,
        extendable: bool,
    },
    /// No exact entry, but some longer entry starts with this sequence.
    Prefix,
    /// No entry can ever match this sequence.
    Miss,
}

#[derive(Debug, Default)]
struct TrieNode {
    payload: Option<Payload>,
    children: HashMap<String, TrieNode>,
}

/// Trie over cell digit strings.
#[derive(Debug, Default)]
pub struct CellTrie {
    root: TrieNode,
}

impl CellTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry keyed by a sequence of cell digit strings.
    pub fn insert(&mut self, cells: &[&str], payload: Payload) {
        let mut node = &mut self.root;
        for digits in cells {
            node = node.children.entry((*digits).to_string()).or_default();
        }
        node.payload = Some(payload);
    }

    /// Match a cell sequence given as any iterator over cells.
    pub fn matches<'a, I>(&self, cells: I) -> CellMatch<'_>
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        let mut node = &self.root;
        for cell in cells {
            match node.children.get(cell.digits()) {
                Some(child) => node = child,
                None => return CellMatch::Miss,
            }
        }
        match &node.payload {
            Some(payload) => CellMatch::Complete {
                payload,
                extendable: !node.children.is_empty(),
            },
            None if !node.children.is_empty() => CellMatch::Prefix,
            // An interior node always has children; only an empty match
            // (the root of an empty trie) lands here.
            None => CellMatch::Miss,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(digit_strs: &[&str]) -> Vec<Cell> {
        digit_strs
            .iter()
            .map(|digits| {
                let dots: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
                Cell::from_dots(&dots).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_trie_complete_terminal() {
        let mut trie = CellTrie::new();
        trie.insert(&["135"], Payload::phonetic("ㄅ"));

        let seq = cells(&["135"]);
        match trie.matches(&seq) {
            CellMatch::Complete {
                payload,
                extendable,
            } => {
                assert_eq!(payload.text, "ㄅ");
                assert!(!extendable);
            }
            other => panic!("unexpected match: {:?}", other),
        }
    }

    #[test]
    fn test_trie_complete_extendable() {
        let mut trie = CellTrie::new();
        trie.insert(&["13"], Payload::phonetic("ㄍ"));
        trie.insert(&["13", "16"], Payload::phonetic("ㄐㄧ"));

        let short = cells(&["13"]);
        match trie.matches(&short) {
            CellMatch::Complete { extendable, .. } => assert!(extendable),
            other => panic!("unexpected match: {:?}", other),
        }

        let long = cells(&["13", "16"]);
        match trie.matches(&long) {
            CellMatch::Complete {
                payload,
                extendable,
            } => {
                assert_eq!(payload.text, "ㄐㄧ");
                assert!(!extendable);
            }
            other => panic!("unexpected match: {:?}", other),
        }
    }

    #[test]
    fn test_trie_prefix_only() {
        let mut trie = CellTrie::new();
        trie.insert(&["5", "5", "5"], Payload::literal("…"));

        let seq = cells(&["5", "5"]);
        assert_eq!(trie.matches(&seq), CellMatch::Prefix);
    }

    #[test]
    fn test_trie_miss() {
        let mut trie = CellTrie::new();
        trie.insert(&["135"], Payload::phonetic("ㄅ"));

        let seq = cells(&["7"]);
        assert_eq!(trie.matches(&seq), CellMatch::Miss);

        let deep = cells(&["135", "7"]);
        assert_eq!(trie.matches(&deep), CellMatch::Miss);
    }
}
