//! Graph construction over a synset registry.
//!
//! Two builders share one output type, [`LexicalGraph`]:
//!
//! - [`BaseGraphBuilder`] keeps every synset and word.
//! - [`TimeDirectedGraphBuilder`] keeps dated words only and orients word
//!   relations by attestation year.

pub mod base_builder;
pub mod model;
pub mod stats;
pub mod time_directed_builder;

pub use base_builder::BaseGraphBuilder;
pub use model::{
    DEFAULT_WEIGHT, EdgeView, GraphEdge, GraphNode, LexicalGraph, NodeId, SYNONYM_SYMBOL,
    SYNSET_SYMBOL, WordId,
};
pub use stats::GraphSummary;
pub use time_directed_builder::TimeDirectedGraphBuilder;
