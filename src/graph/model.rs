//! The produced graph: supernodes, word nodes and attributed edges.
//!
//! A [`LexicalGraph`] is a directed multigraph. Symmetric relations are two
//! opposite edges carrying the same symbol. Builders assemble a graph through
//! the crate-private mutators and hand it out as an immutable value; the only
//! public transformations consume the graph and return a new one.

use std::fmt;
use std::str::FromStr;

use ahash::AHashMap;
use petgraph::Direction;
use petgraph::graph::{DiGraph, EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use crate::error::{LexigraphError, Result};
use crate::lexicon::SynsetKey;

/// Sequential identifier of a word node.
pub type WordId = u32;

/// Symbol on edges between a supernode and its member words.
pub const SYNSET_SYMBOL: &str = "synset";
/// Symbol on edges between two words of the same synset.
pub const SYNONYM_SYMBOL: &str = "synonym";
/// Weight given to every edge at construction time.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Node identifier. Supernodes and word nodes never share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum NodeId {
    Synset(SynsetKey),
    Word(WordId),
}

impl NodeId {
    pub fn is_supernode(&self) -> bool {
        matches!(self, NodeId::Synset(_))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Synset(key) => write!(f, "synset:{key}"),
            NodeId::Word(id) => write!(f, "word:{id}"),
        }
    }
}

impl FromStr for NodeId {
    type Err = LexigraphError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || LexigraphError::other(format!("invalid node id '{s}'"));
        match s.split_once(':') {
            Some(("synset", key)) => key.parse().map(NodeId::Synset).map_err(|_| invalid()),
            Some(("word", id)) => id.parse().map(NodeId::Word).map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

/// Node payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphNode {
    Supernode {
        key: SynsetKey,
    },
    Word {
        id: WordId,
        word: String,
        /// Attestation year, set in time-directed graphs only.
        year: Option<i32>,
    },
}

impl GraphNode {
    pub fn id(&self) -> NodeId {
        match self {
            GraphNode::Supernode { key } => NodeId::Synset(*key),
            GraphNode::Word { id, .. } => NodeId::Word(*id),
        }
    }

    pub fn word(&self) -> Option<&str> {
        match self {
            GraphNode::Word { word, .. } => Some(word),
            GraphNode::Supernode { .. } => None,
        }
    }

    pub fn year(&self) -> Option<i32> {
        match self {
            GraphNode::Word { year, .. } => *year,
            GraphNode::Supernode { .. } => None,
        }
    }
}

/// Edge payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub symbol: String,
    pub weight: f64,
}

/// Borrowed view of one directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeView<'a> {
    pub source: NodeId,
    pub target: NodeId,
    pub symbol: &'a str,
    pub weight: f64,
}

/// Directed multigraph over supernodes and word nodes.
#[derive(Debug, Clone, Default)]
pub struct LexicalGraph {
    graph: DiGraph<GraphNode, GraphEdge>,
    nodes: AHashMap<NodeId, NodeIndex>,
    word_nodes: AHashMap<String, WordId>,
}

impl LexicalGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_supernode(&mut self, key: SynsetKey) {
        self.insert_node(GraphNode::Supernode { key });
    }

    pub(crate) fn add_word(&mut self, id: WordId, word: &str, year: Option<i32>) {
        self.word_nodes.insert(word.to_string(), id);
        self.insert_node(GraphNode::Word {
            id,
            word: word.to_string(),
            year,
        });
    }

    fn insert_node(&mut self, node: GraphNode) {
        let id = node.id();
        if !self.nodes.contains_key(&id) {
            let index = self.graph.add_node(node);
            self.nodes.insert(id, index);
        }
    }

    /// Add one directed edge.
    pub(crate) fn add_edge(&mut self, source: NodeId, target: NodeId, symbol: &str) -> Result<()> {
        let from = self.require(source)?;
        let to = self.require(target)?;
        self.graph.add_edge(
            from,
            to,
            GraphEdge {
                symbol: symbol.to_string(),
                weight: DEFAULT_WEIGHT,
            },
        );
        Ok(())
    }

    /// Add a symmetric relation as the forward edge followed by the reverse edge.
    pub(crate) fn add_symmetric_edge(&mut self, a: NodeId, b: NodeId, symbol: &str) -> Result<()> {
        self.add_edge(a, b, symbol)?;
        self.add_edge(b, a, symbol)
    }

    fn require(&self, id: NodeId) -> Result<NodeIndex> {
        self.node_index(id)
            .ok_or_else(|| LexigraphError::graph(format!("node {id} is not in the graph")))
    }

    /// Underlying petgraph index of a node, for running petgraph algorithms
    /// against [`LexicalGraph::inner`].
    pub fn node_index(&self, id: NodeId) -> Option<NodeIndex> {
        self.nodes.get(&id).copied()
    }

    /// Access the underlying petgraph graph.
    pub fn inner(&self) -> &DiGraph<GraphNode, GraphEdge> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn word_count(&self) -> usize {
        self.word_nodes.len()
    }

    pub fn supernode_count(&self) -> usize {
        self.node_count() - self.word_count()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.node_index(id).map(|index| &self.graph[index])
    }

    /// Word string of a word node.
    pub fn word(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(GraphNode::word)
    }

    /// Attestation year of a word node.
    pub fn year(&self, id: NodeId) -> Option<i32> {
        self.node(id).and_then(GraphNode::year)
    }

    /// Node of a word, if the word is in the graph.
    pub fn word_node(&self, word: &str) -> Option<NodeId> {
        self.word_nodes.get(word).map(|id| NodeId::Word(*id))
    }

    /// All nodes in insertion order: supernodes first, then words by id.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph.node_weights()
    }

    pub fn supernodes(&self) -> impl Iterator<Item = SynsetKey> + '_ {
        self.nodes().filter_map(|node| match node {
            GraphNode::Supernode { key } => Some(*key),
            GraphNode::Word { .. } => None,
        })
    }

    /// `(id, word)` for every word node.
    pub fn words(&self) -> impl Iterator<Item = (WordId, &str)> {
        self.nodes().filter_map(|node| match node {
            GraphNode::Word { id, word, .. } => Some((*id, word.as_str())),
            GraphNode::Supernode { .. } => None,
        })
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_>> {
        self.graph.edge_references().map(|edge| self.view(edge))
    }

    /// Edges leaving `id`.
    pub fn out_edges(&self, id: NodeId) -> Vec<EdgeView<'_>> {
        self.edges_directed(id, Direction::Outgoing)
    }

    /// Edges entering `id`.
    pub fn in_edges(&self, id: NodeId) -> Vec<EdgeView<'_>> {
        self.edges_directed(id, Direction::Incoming)
    }

    fn edges_directed(&self, id: NodeId, direction: Direction) -> Vec<EdgeView<'_>> {
        match self.node_index(id) {
            Some(index) => {
                let mut edges: Vec<_> = self
                    .graph
                    .edges_directed(index, direction)
                    .map(|edge| self.view(edge))
                    .collect();
                // petgraph walks adjacency lists newest first
                edges.reverse();
                edges
            }
            None => Vec::new(),
        }
    }

    fn view<'a>(&'a self, edge: EdgeReference<'a, GraphEdge>) -> EdgeView<'a> {
        EdgeView {
            source: self.graph[edge.source()].id(),
            target: self.graph[edge.target()].id(),
            symbol: &edge.weight().symbol,
            weight: edge.weight().weight,
        }
    }

    /// First edge inserted from `source` to `target`.
    pub fn edge(&self, source: NodeId, target: NodeId) -> Option<EdgeView<'_>> {
        let from = self.node_index(source)?;
        let to = self.node_index(target)?;
        self.graph
            .edges_connecting(from, to)
            .min_by_key(|edge| edge.id())
            .map(|edge| self.view(edge))
    }

    /// Every edge from `source` to `target`, in insertion order.
    pub fn edges_between(&self, source: NodeId, target: NodeId) -> Vec<EdgeView<'_>> {
        match (self.node_index(source), self.node_index(target)) {
            (Some(from), Some(to)) => {
                let mut edges: Vec<_> = self.graph.edges_connecting(from, to).collect();
                edges.sort_by_key(|edge| edge.id());
                edges.into_iter().map(|edge| self.view(edge)).collect()
            }
            _ => Vec::new(),
        }
    }

    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.edge(source, target).is_some()
    }

    /// Symbol of the directed edge `source -> target`.
    pub fn symbol_on_edge(&self, source: NodeId, target: NodeId) -> Result<&str> {
        self.edge(source, target)
            .map(|edge| edge.symbol)
            .ok_or_else(|| LexigraphError::graph(format!("no edge from {source} to {target}")))
    }

    /// Weight of the directed edge `source -> target`.
    pub fn weight_on_edge(&self, source: NodeId, target: NodeId) -> Result<f64> {
        self.edge(source, target)
            .map(|edge| edge.weight)
            .ok_or_else(|| LexigraphError::graph(format!("no edge from {source} to {target}")))
    }

    /// Replace every edge weight with `weigh(edge)`.
    pub fn with_weights<F>(mut self, mut weigh: F) -> Self
    where
        F: FnMut(EdgeView<'_>) -> f64,
    {
        let weights: Vec<f64> = self.edges().map(&mut weigh).collect();
        for (edge, weight) in self.graph.edge_weights_mut().zip(weights) {
            edge.weight = weight;
        }
        self
    }

    /// The words-only projection: supernodes and every edge touching them are
    /// removed. Word ids are kept.
    pub fn without_supernodes(&self) -> LexicalGraph {
        let graph = self.graph.filter_map(
            |_, node| match node {
                GraphNode::Word { .. } => Some(node.clone()),
                GraphNode::Supernode { .. } => None,
            },
            |_, edge| Some(edge.clone()),
        );
        let nodes = graph
            .node_indices()
            .map(|index| (graph[index].id(), index))
            .collect();

        LexicalGraph {
            graph,
            nodes,
            word_nodes: self.word_nodes.clone(),
        }
    }
}
