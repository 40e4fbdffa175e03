//! Builder for the base synset/word graph.

use std::collections::BTreeSet;

use ahash::AHashMap;
use tracing::{info, trace};

use super::model::{LexicalGraph, NodeId, SYNONYM_SYMBOL, SYNSET_SYMBOL, WordId};
use crate::error::{LexigraphError, Result};
use crate::lexicon::{PartOfSpeech, Pointer, Synset, SynsetRegistry};

/// Builds the base graph: one supernode per synset, one node per distinct
/// word, membership and synonym edges in both directions, and pointer edges
/// in their encoded direction.
pub struct BaseGraphBuilder<'a> {
    registry: &'a SynsetRegistry,
    allowed: BTreeSet<PartOfSpeech>,
}

impl<'a> BaseGraphBuilder<'a> {
    /// Create a builder that keeps pointers into the registry's active parts
    /// of speech.
    pub fn new(registry: &'a SynsetRegistry) -> Self {
        Self {
            registry,
            allowed: registry.parts_of_speech().clone(),
        }
    }

    /// Only keep pointers whose target part of speech is in `allowed`.
    pub fn with_parts_of_speech<I>(mut self, allowed: I) -> Self
    where
        I: IntoIterator<Item = PartOfSpeech>,
    {
        self.allowed = allowed.into_iter().collect();
        self
    }

    pub fn build(&self) -> Result<LexicalGraph> {
        let mut graph = LexicalGraph::new();

        for synset in self.registry.iter() {
            graph.add_supernode(synset.key);
        }

        let mut word_ids: AHashMap<&str, WordId> = AHashMap::new();
        for (index, word) in self.registry.distinct_words().into_iter().enumerate() {
            let id = word_id(index)?;
            graph.add_word(id, word, None);
            word_ids.insert(word, id);
        }
        let node_of = |word: &str| NodeId::Word(word_ids[word]);

        for synset in self.registry.iter() {
            let supernode = NodeId::Synset(synset.key);

            for (i, word) in synset.words.iter().enumerate() {
                // a word listed twice is still one member
                if !synset.words[..i].contains(word) {
                    graph.add_symmetric_edge(supernode, node_of(word), SYNSET_SYMBOL)?;
                }
            }

            for (i, first) in synset.words.iter().enumerate() {
                for second in &synset.words[i + 1..] {
                    if first != second {
                        graph.add_symmetric_edge(node_of(first), node_of(second), SYNONYM_SYMBOL)?;
                    }
                }
            }

            for pointer in &synset.pointers {
                if !self.allowed.contains(&pointer.target_pos) {
                    trace!(key = synset.key, symbol = %pointer.symbol, "pointer target part of speech excluded");
                    continue;
                }
                let target = target_synset(self.registry, synset, pointer)?;
                if pointer.connection.is_synset_level() {
                    graph.add_edge(supernode, NodeId::Synset(target.key), &pointer.symbol)?;
                } else {
                    let (source_word, target_word) = pointer_words(synset, target, pointer)?;
                    graph.add_edge(node_of(source_word), node_of(target_word), &pointer.symbol)?;
                }
            }
        }

        info!(
            supernodes = graph.supernode_count(),
            words = graph.word_count(),
            edges = graph.edge_count(),
            "built base graph"
        );
        Ok(graph)
    }
}

pub(super) fn word_id(index: usize) -> Result<WordId> {
    WordId::try_from(index)
        .map_err(|_| LexigraphError::graph(format!("word index {index} exceeds the word id space")))
}

/// Look up the synset a pointer leads to.
pub(super) fn target_synset<'r>(
    registry: &'r SynsetRegistry,
    source: &Synset,
    pointer: &Pointer,
) -> Result<&'r Synset> {
    registry.get(pointer.connection.dst_key).ok_or_else(|| {
        LexigraphError::graph(format!(
            "pointer '{}' from synset {} targets synset {} which was not read",
            pointer.symbol, source.key, pointer.connection.dst_key
        ))
    })
}

/// Resolve the word indices of a word-level pointer.
pub(super) fn pointer_words<'s>(
    source: &'s Synset,
    target: &'s Synset,
    pointer: &Pointer,
) -> Result<(&'s str, &'s str)> {
    let connection = &pointer.connection;
    let resolve = |synset: &'s Synset, index: u8| {
        synset.word_at(index).ok_or_else(|| {
            LexigraphError::graph(format!(
                "pointer '{}' from synset {} refers to word {} of synset {} which has {} words",
                pointer.symbol,
                source.key,
                index,
                synset.key,
                synset.words.len()
            ))
        })
    };
    Ok((
        resolve(source, connection.src_index)?,
        resolve(target, connection.dst_index)?,
    ))
}
