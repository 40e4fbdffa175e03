//! End-to-end construction: configuration, reading, and both graph builds.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chronology::{DEFAULT_DELIMITER, TimeTable};
use crate::error::{LexigraphError, Result};
use crate::graph::{BaseGraphBuilder, LexicalGraph, TimeDirectedGraphBuilder};
use crate::lexicon::{LexiconReader, PartOfSpeech, SynsetRegistry};

/// Inputs of one analysis run.
///
/// ```json
/// {
///   "data_files": ["dict/data.noun", "dict/data.verb"],
///   "time_data_file": "word_to_year_formatted.txt"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// `data.*` lexicon files, read in order.
    pub data_files: Vec<PathBuf>,

    /// Word-year table. Without it no time-directed graph is built.
    pub time_data_file: Option<PathBuf>,

    /// Field separator of the word-year table.
    pub time_delimiter: String,

    /// Pointer targets to keep. Defaults to the parts of speech implied by
    /// the data file suffixes.
    pub parts_of_speech: Option<Vec<PartOfSpeech>>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            data_files: Vec::new(),
            time_data_file: None,
            time_delimiter: DEFAULT_DELIMITER.to_string(),
            parts_of_speech: None,
        }
    }
}

impl LexiconConfig {
    /// Create a configuration for the given data files.
    pub fn new<I, P>(data_files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            data_files: data_files.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_time_data<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.time_data_file = Some(path.into());
        self
    }

    pub fn with_parts_of_speech<I>(mut self, parts_of_speech: I) -> Self
    where
        I: IntoIterator<Item = PartOfSpeech>,
    {
        self.parts_of_speech = Some(parts_of_speech.into_iter().collect());
        self
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LexigraphError::input(format!(
                "Failed to read configuration file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: LexiconConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_files.is_empty() {
            return Err(LexigraphError::config("at least one data file is required"));
        }
        if self.time_delimiter.is_empty() {
            return Err(LexigraphError::config("time_delimiter must not be empty"));
        }
        Ok(())
    }

    /// Parts of speech whose pointers are materialized.
    pub fn allowed_parts_of_speech(&self) -> BTreeSet<PartOfSpeech> {
        match &self.parts_of_speech {
            Some(parts) => parts.iter().copied().collect(),
            None => LexiconReader::parts_of_speech(&self.data_files),
        }
    }
}

/// The registry and the graphs built from it.
#[derive(Debug)]
pub struct LexicalNetwork {
    registry: SynsetRegistry,
    time_table: Option<TimeTable>,
    parts_of_speech: BTreeSet<PartOfSpeech>,
    graph: LexicalGraph,
    time_directed_graph: Option<LexicalGraph>,
}

impl LexicalNetwork {
    /// Read all inputs named by `config` and build the graphs.
    pub fn build(config: &LexiconConfig) -> Result<Self> {
        config.validate()?;
        let time_table = config
            .time_data_file
            .as_ref()
            .map(|path| TimeTable::load_with_delimiter(path, &config.time_delimiter))
            .transpose()?;
        let registry = LexiconReader::read(&config.data_files)?;
        Self::from_parts(registry, time_table, config.allowed_parts_of_speech())
    }

    /// Build the graphs from an already read registry.
    ///
    /// The two builders only read the registry, so they run side by side.
    pub fn from_parts(
        registry: SynsetRegistry,
        time_table: Option<TimeTable>,
        parts_of_speech: BTreeSet<PartOfSpeech>,
    ) -> Result<Self> {
        let (graph, time_directed_graph) = {
            let base = BaseGraphBuilder::new(&registry)
                .with_parts_of_speech(parts_of_speech.iter().copied());
            match &time_table {
                Some(table) => {
                    let timed = TimeDirectedGraphBuilder::new(&registry, table)
                        .with_parts_of_speech(parts_of_speech.iter().copied());
                    let (graph, time_directed_graph) =
                        rayon::join(|| base.build(), || timed.build());
                    (graph?, Some(time_directed_graph?))
                }
                None => (base.build()?, None),
            }
        };

        info!(
            synsets = registry.len(),
            time_directed = time_directed_graph.is_some(),
            "lexical network ready"
        );
        Ok(Self {
            registry,
            time_table,
            parts_of_speech,
            graph,
            time_directed_graph,
        })
    }

    pub fn registry(&self) -> &SynsetRegistry {
        &self.registry
    }

    pub fn time_table(&self) -> Option<&TimeTable> {
        self.time_table.as_ref()
    }

    /// Parts of speech whose pointers were materialized.
    pub fn parts_of_speech(&self) -> &BTreeSet<PartOfSpeech> {
        &self.parts_of_speech
    }

    /// The base graph.
    pub fn graph(&self) -> &LexicalGraph {
        &self.graph
    }

    /// The time-directed graph, present when a time table was configured.
    pub fn time_directed_graph(&self) -> Option<&LexicalGraph> {
        self.time_directed_graph.as_ref()
    }
}
