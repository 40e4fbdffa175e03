//! # lexigraph
//!
//! Decodes a WordNet-style lexical database and builds graphs over it.
//!
//! ## Features
//!
//! - Decoder for the packed `data.*` record format
//! - Synset registry with part-of-speech banded keys
//! - Base graph of synset supernodes and word nodes
//! - Time-directed graph oriented by each word's earliest attested year
//! - Graph summaries and a words-only projection
//!
//! ```no_run
//! use lexigraph::prelude::*;
//!
//! # fn main() -> lexigraph::error::Result<()> {
//! let config = LexiconConfig::new(["dict/data.noun", "dict/data.verb"])
//!     .with_time_data("word_to_year_formatted.txt");
//! let network = LexicalNetwork::build(&config)?;
//! println!("{:?}", GraphSummary::of(network.graph()));
//! # Ok(())
//! # }
//! ```

pub mod chronology;
pub mod cli;
pub mod error;
pub mod graph;
pub mod lexicon;
pub mod pipeline;

pub mod prelude {
    pub use crate::chronology::TimeTable;
    pub use crate::error::{LexigraphError, Result};
    pub use crate::graph::{
        BaseGraphBuilder, GraphSummary, LexicalGraph, NodeId, TimeDirectedGraphBuilder,
    };
    pub use crate::lexicon::{LexiconReader, PartOfSpeech, RecordDecoder, Synset, SynsetRegistry};
    pub use crate::pipeline::{LexicalNetwork, LexiconConfig};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
