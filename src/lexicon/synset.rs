//! Decoded synset records.

use serde::{Deserialize, Serialize};

use super::part_of_speech::{PartOfSpeech, SynsetKey};

/// Endpoints of a pointer.
///
/// Word indices are 1-based positions into the `words` of the source and
/// target synsets. The pair `(0, 0)` marks a relation between the synsets
/// themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub src_key: SynsetKey,
    pub src_index: u8,
    pub dst_key: SynsetKey,
    pub dst_index: u8,
}

impl Connection {
    /// Whether the pointer links the two synsets as a whole.
    pub fn is_synset_level(&self) -> bool {
        self.src_index == 0 && self.dst_index == 0
    }
}

/// A typed lexical relation owned by its source synset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pointer {
    /// Relation code, e.g. `@` (hypernym) or `!` (antonym).
    pub symbol: String,
    /// Part of speech of the target synset.
    pub target_pos: PartOfSpeech,
    pub connection: Connection,
}

/// A set of words sharing one sense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synset {
    pub key: SynsetKey,
    pub synset_type: PartOfSpeech,
    /// Member words in record order. Pointers refer to them by position.
    pub words: Vec<String>,
    pub pointers: Vec<Pointer>,
    pub description: String,
}

impl Synset {
    /// Resolve a 1-based word index. Index 0 and out-of-range indices give `None`.
    pub fn word_at(&self, index: u8) -> Option<&str> {
        let position = usize::from(index).checked_sub(1)?;
        self.words.get(position).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_at_is_one_based() {
        let synset = Synset {
            key: 100_000_001,
            synset_type: PartOfSpeech::Noun,
            words: vec!["cat".to_string(), "feline".to_string()],
            pointers: Vec::new(),
            description: String::new(),
        };

        assert_eq!(synset.word_at(1), Some("cat"));
        assert_eq!(synset.word_at(2), Some("feline"));
        assert_eq!(synset.word_at(0), None);
        assert_eq!(synset.word_at(3), None);
    }

    #[test]
    fn test_synset_level_connection() {
        let connection = Connection {
            src_key: 1,
            src_index: 0,
            dst_key: 2,
            dst_index: 0,
        };
        assert!(connection.is_synset_level());

        let connection = Connection {
            src_index: 1,
            ..connection
        };
        assert!(!connection.is_synset_level());
    }
}
