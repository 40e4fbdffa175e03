//! Builder for the chronologically directed graph.
//!
//! Only dated words take part: a word is kept when the time table knows it for
//! the part of speech of a synset that lists it, and a synset is kept when at
//! least one of its words is. Relations between two words point from the
//! older word to the newer one; words of the same age are linked both ways.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use ahash::{AHashMap, AHashSet};
use tracing::{debug, info, trace};

use super::base_builder::{pointer_words, target_synset, word_id};
use super::model::{LexicalGraph, NodeId, SYNONYM_SYMBOL, SYNSET_SYMBOL, WordId};
use crate::chronology::TimeTable;
use crate::error::Result;
use crate::lexicon::{PartOfSpeech, SynsetKey, SynsetRegistry};

/// Builds the time-directed variant of the base graph.
pub struct TimeDirectedGraphBuilder<'a> {
    registry: &'a SynsetRegistry,
    time_table: &'a TimeTable,
    allowed: BTreeSet<PartOfSpeech>,
}

impl<'a> TimeDirectedGraphBuilder<'a> {
    pub fn new(registry: &'a SynsetRegistry, time_table: &'a TimeTable) -> Self {
        Self {
            registry,
            time_table,
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
        // Dated members of every kept synset, and the earliest year per word.
        let mut members: BTreeMap<SynsetKey, Vec<(&str, i32)>> = BTreeMap::new();
        let mut word_years: BTreeMap<&str, i32> = BTreeMap::new();
        for synset in self.registry.iter() {
            let dated: Vec<(&str, i32)> = synset
                .words
                .iter()
                .filter_map(|word| {
                    self.time_table
                        .year(word, synset.synset_type)
                        .map(|year| (word.as_str(), year))
                })
                .collect();
            if dated.is_empty() {
                trace!(key = synset.key, "synset has no dated words");
                continue;
            }
            for &(word, year) in &dated {
                word_years
                    .entry(word)
                    .and_modify(|earliest| *earliest = (*earliest).min(year))
                    .or_insert(year);
            }
            members.insert(synset.key, dated);
        }

        let mut graph = LexicalGraph::new();
        for key in members.keys() {
            graph.add_supernode(*key);
        }
        let mut word_ids: AHashMap<&str, WordId> = AHashMap::new();
        for (index, (&word, &year)) in word_years.iter().enumerate() {
            let id = word_id(index)?;
            graph.add_word(id, word, Some(year));
            word_ids.insert(word, id);
        }
        let node_of = |word: &str| NodeId::Word(word_ids[word]);
        let kept: AHashSet<SynsetKey> = members.keys().copied().collect();

        for (key, dated) in &members {
            let supernode = NodeId::Synset(*key);

            for (i, &(word, _)) in dated.iter().enumerate() {
                if !dated[..i].iter().any(|&(earlier, _)| earlier == word) {
                    graph.add_symmetric_edge(supernode, node_of(word), SYNSET_SYMBOL)?;
                }
            }

            for (i, &(first, first_year)) in dated.iter().enumerate() {
                for &(second, second_year) in &dated[i + 1..] {
                    if first != second {
                        add_age_ordered(
                            &mut graph,
                            (node_of(first), first_year),
                            (node_of(second), second_year),
                            SYNONYM_SYMBOL,
                        )?;
                    }
                }
            }

            let Some(synset) = self.registry.get(*key) else {
                continue;
            };
            for pointer in &synset.pointers {
                if !self.allowed.contains(&pointer.target_pos) {
                    continue;
                }
                let target = target_synset(self.registry, synset, pointer)?;
                if pointer.connection.is_synset_level() {
                    if kept.contains(&target.key) {
                        graph.add_edge(supernode, NodeId::Synset(target.key), &pointer.symbol)?;
                    } else {
                        debug!(
                            source = synset.key,
                            target = target.key,
                            symbol = %pointer.symbol,
                            "pointer target has no dated words"
                        );
                    }
                    continue;
                }

                let (source_word, target_word) = pointer_words(synset, target, pointer)?;
                let source_year = self.time_table.year(source_word, synset.synset_type);
                let target_year = self.time_table.year(target_word, target.synset_type);
                match (source_year, target_year) {
                    (Some(source_year), Some(target_year)) => add_age_ordered(
                        &mut graph,
                        (node_of(source_word), source_year),
                        (node_of(target_word), target_year),
                        &pointer.symbol,
                    )?,
                    _ => trace!(
                        source = source_word,
                        target = target_word,
                        symbol = %pointer.symbol,
                        "pointer word without date dropped"
                    ),
                }
            }
        }

        info!(
            supernodes = graph.supernode_count(),
            words = graph.word_count(),
            edges = graph.edge_count(),
            "built time-directed graph"
        );
        Ok(graph)
    }
}

/// Link two dated words from older to newer, or both ways when equally old.
fn add_age_ordered(
    graph: &mut LexicalGraph,
    (first, first_year): (NodeId, i32),
    (second, second_year): (NodeId, i32),
    symbol: &str,
) -> Result<()> {
    match first_year.cmp(&second_year) {
        Ordering::Less => graph.add_edge(first, second, symbol),
        Ordering::Greater => graph.add_edge(second, first, symbol),
        Ordering::Equal => graph.add_symmetric_edge(first, second, symbol),
    }
}
