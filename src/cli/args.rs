//! Command line argument parsing for the lexigraph CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lexicon::PartOfSpeech;
use crate::pipeline::LexiconConfig;

/// lexigraph - Build synset and word graphs from a lexical database
#[derive(Parser, Debug, Clone)]
#[command(name = "lexigraph")]
#[command(about = "Build synset and word graphs from a lexical database")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexigraphArgs {
    /// Increase logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexigraphArgs {
    /// Effective verbosity: 0 quiet, 1 normal, then one step per `-v`.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }

    /// Default log filter for the effective verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbosity() {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show node and edge counts of the built graphs
    Stats(StatsArgs),

    /// Show one decoded synset
    Synset(SynsetArgs),

    /// Show the synsets, dating and node ids of a word
    Word(WordArgs),

    /// Show the edges between two nodes
    Edge(EdgeArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Stats(_) => "stats",
            Command::Synset(_) => "synset",
            Command::Word(_) => "word",
            Command::Edge(_) => "edge",
        }
    }
}

/// Where the lexicon comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "LEXIGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Lexicon data files (data.noun, data.verb, ...)
    #[arg(short, long = "data", value_name = "DATA_FILE", num_args = 1..)]
    pub data_files: Vec<PathBuf>,

    /// Word creation year table
    #[arg(short, long = "time-data", value_name = "TIME_FILE")]
    pub time_data: Option<PathBuf>,

    /// Field delimiter of the year table
    #[arg(long, value_name = "DELIMITER")]
    pub delimiter: Option<String>,

    /// Parts of speech whose pointers are kept (n, v, a, s, r)
    #[arg(long = "pos", value_name = "POS", value_delimiter = ',')]
    pub parts_of_speech: Vec<PartOfSpeech>,
}

impl SourceArgs {
    /// Resolve the configuration file (if any) with command line overrides.
    pub fn to_config(&self) -> Result<LexiconConfig> {
        let mut config = match &self.config {
            Some(path) => LexiconConfig::load_from_file(path)?,
            None => LexiconConfig::default(),
        };

        if !self.data_files.is_empty() {
            config.data_files = self.data_files.clone();
        }
        if let Some(time_data) = &self.time_data {
            config.time_data_file = Some(time_data.clone());
        }
        if let Some(delimiter) = &self.delimiter {
            config.time_delimiter = delimiter.clone();
        }
        if !self.parts_of_speech.is_empty() {
            config.parts_of_speech = Some(self.parts_of_speech.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

/// Which of the built graphs to query.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GraphKind {
    /// Every synset and word
    #[default]
    Base,
    /// Dated words only, oriented by year
    Time,
}

/// Arguments for graph statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Summarize the words-only projection instead of the full graphs
    #[arg(long)]
    pub words_only: bool,
}

/// Arguments for showing a synset
#[derive(Parser, Debug, Clone)]
pub struct SynsetArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Synset key (file offset plus part-of-speech band)
    #[arg(value_name = "KEY")]
    pub key: u64,
}

/// Arguments for showing a word
#[derive(Parser, Debug, Clone)]
pub struct WordArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for showing edges
#[derive(Parser, Debug, Clone)]
pub struct EdgeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Source node: a word, `word:ID` or `synset:KEY`
    #[arg(value_name = "SOURCE")]
    pub from: String,

    /// Target node: a word, `word:ID` or `synset:KEY`
    #[arg(value_name = "TARGET")]
    pub to: String,

    /// Graph to query
    #[arg(short, long, value_enum, default_value = "base")]
    pub graph: GraphKind,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
