//! Key-addressed store of decoded synsets.

use std::collections::{BTreeMap, BTreeSet};

use ahash::AHashMap;

use super::part_of_speech::{PartOfSpeech, SynsetKey};
use super::synset::Synset;

/// All synsets read for one analysis run, keyed by [`SynsetKey`].
///
/// Iteration is in key order so graph construction is reproducible. The
/// registry is read-only once the reader hands it out.
#[derive(Debug, Clone, Default)]
pub struct SynsetRegistry {
    synsets: BTreeMap<SynsetKey, Synset>,
    word_to_synsets: AHashMap<String, Vec<SynsetKey>>,
    parts_of_speech: BTreeSet<PartOfSpeech>,
}

impl SynsetRegistry {
    /// Create an empty registry with no active parts of speech.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from synsets, marking the given parts of speech active.
    ///
    /// Later synsets replace earlier ones with the same key.
    pub fn from_synsets<I, P>(synsets: I, parts_of_speech: P) -> Self
    where
        I: IntoIterator<Item = Synset>,
        P: IntoIterator<Item = PartOfSpeech>,
    {
        let mut registry = SynsetRegistry::new();
        registry.parts_of_speech.extend(parts_of_speech);
        for synset in synsets {
            registry.insert(synset);
        }
        registry.rebuild_word_index();
        registry
    }

    /// Insert a synset, returning the record it replaced.
    pub(crate) fn insert(&mut self, synset: Synset) -> Option<Synset> {
        self.synsets.insert(synset.key, synset)
    }

    pub(crate) fn activate(&mut self, parts_of_speech: &[PartOfSpeech]) {
        self.parts_of_speech.extend(parts_of_speech.iter().copied());
    }

    /// Recompute the word -> synsets index after all inserts.
    pub(crate) fn rebuild_word_index(&mut self) {
        self.word_to_synsets.clear();
        for (key, synset) in &self.synsets {
            for word in &synset.words {
                let keys = self.word_to_synsets.entry(word.clone()).or_default();
                if keys.last() != Some(key) {
                    keys.push(*key);
                }
            }
        }
    }

    pub fn get(&self, key: SynsetKey) -> Option<&Synset> {
        self.synsets.get(&key)
    }

    pub fn contains(&self, key: SynsetKey) -> bool {
        self.synsets.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    /// Iterate synsets in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Synset> {
        self.synsets.values()
    }

    /// Keys of every synset that lists `word`, in key order.
    pub fn synsets_of(&self, word: &str) -> &[SynsetKey] {
        self.word_to_synsets
            .get(word)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Parts of speech contributed by the files that were read.
    pub fn parts_of_speech(&self) -> &BTreeSet<PartOfSpeech> {
        &self.parts_of_speech
    }

    /// Every distinct word, sorted.
    pub fn distinct_words(&self) -> BTreeSet<&str> {
        self.synsets
            .values()
            .flat_map(|synset| synset.words.iter().map(String::as_str))
            .collect()
    }
}
