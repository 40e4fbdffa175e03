//! Node and edge counts of a built graph.

use std::collections::BTreeMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use super::model::{LexicalGraph, NodeId};

/// Counts describing one graph.
///
/// `directed_edges` counts stored edges. `logical_edges` counts relations:
/// an edge and an opposite edge with the same symbol are one relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub word_nodes: usize,
    pub supernodes: usize,
    pub directed_edges: usize,
    pub logical_edges: usize,
    /// Directed edges between two supernodes.
    pub supernode_edges: usize,
    /// Directed edges between two word nodes.
    pub word_edges: usize,
    /// Directed edges between a supernode and a word node.
    pub membership_edges: usize,
    /// Directed edges per symbol.
    pub edges_by_symbol: BTreeMap<String, usize>,
}

impl GraphSummary {
    pub fn of(graph: &LexicalGraph) -> Self {
        let mut supernode_edges = 0;
        let mut word_edges = 0;
        let mut membership_edges = 0;
        let mut edges_by_symbol: BTreeMap<String, usize> = BTreeMap::new();
        // (low, high, symbol) -> (edges low -> high, edges high -> low)
        let mut pairs: AHashMap<(NodeId, NodeId, &str), (usize, usize)> = AHashMap::new();

        for edge in graph.edges() {
            match (edge.source.is_supernode(), edge.target.is_supernode()) {
                (true, true) => supernode_edges += 1,
                (false, false) => word_edges += 1,
                _ => membership_edges += 1,
            }
            *edges_by_symbol.entry(edge.symbol.to_string()).or_default() += 1;

            let counts = if edge.source <= edge.target {
                let counts = pairs
                    .entry((edge.source, edge.target, edge.symbol))
                    .or_default();
                &mut counts.0
            } else {
                let counts = pairs
                    .entry((edge.target, edge.source, edge.symbol))
                    .or_default();
                &mut counts.1
            };
            *counts += 1;
        }

        GraphSummary {
            nodes: graph.node_count(),
            word_nodes: graph.word_count(),
            supernodes: graph.supernode_count(),
            directed_edges: graph.edge_count(),
            logical_edges: pairs.values().map(|(forward, backward)| (*forward).max(*backward)).sum(),
            supernode_edges,
            word_edges,
            membership_edges,
            edges_by_symbol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::{SYNONYM_SYMBOL, SYNSET_SYMBOL};

    #[test]
    fn test_summary_counts_symmetric_pairs_once() {
        let mut graph = LexicalGraph::new();
        graph.add_supernode(100_000_001);
        graph.add_supernode(100_000_002);
        graph.add_word(0, "cat", None);
        graph.add_word(1, "feline", None);
        let a = NodeId::Synset(100_000_001);
        let b = NodeId::Synset(100_000_002);
        let cat = NodeId::Word(0);
        let feline = NodeId::Word(1);
        graph.add_symmetric_edge(a, cat, SYNSET_SYMBOL).unwrap();
        graph.add_symmetric_edge(a, feline, SYNSET_SYMBOL).unwrap();
        graph.add_symmetric_edge(cat, feline, SYNONYM_SYMBOL).unwrap();
        graph.add_edge(a, b, "@").unwrap();
        graph.add_edge(b, a, "~").unwrap();

        let summary = GraphSummary::of(&graph);
        assert_eq!(summary.nodes, 4);
        assert_eq!(summary.word_nodes, 2);
        assert_eq!(summary.supernodes, 2);
        assert_eq!(summary.directed_edges, 8);
        assert_eq!(summary.logical_edges, 5);
        assert_eq!(summary.supernode_edges, 2);
        assert_eq!(summary.word_edges, 2);
        assert_eq!(summary.membership_edges, 4);
        assert_eq!(summary.edges_by_symbol[SYNSET_SYMBOL], 4);
        assert_eq!(summary.edges_by_symbol["@"], 1);
    }

    #[test]
    fn test_parallel_edges_count_separately() {
        let mut graph = LexicalGraph::new();
        graph.add_word(0, "a", None);
        graph.add_word(1, "b", None);
        let a = NodeId::Word(0);
        let b = NodeId::Word(1);
        graph.add_symmetric_edge(a, b, SYNONYM_SYMBOL).unwrap();
        graph.add_symmetric_edge(a, b, SYNONYM_SYMBOL).unwrap();
        graph.add_edge(a, b, "+").unwrap();

        let summary = GraphSummary::of(&graph);
        assert_eq!(summary.directed_edges, 5);
        assert_eq!(summary.logical_edges, 3);
    }
}
