//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{GraphKind, LexigraphArgs, OutputFormat};
use crate::error::Result;
use crate::graph::{GraphSummary, NodeId};
use crate::lexicon::{PartOfSpeech, SynsetKey};

/// Result structure for the `stats` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct NetworkStats {
    pub synsets: usize,
    pub distinct_words: usize,
    pub parts_of_speech: Vec<PartOfSpeech>,
    /// `(word, part of speech)` entries in the year table, when one was loaded.
    pub dated_entries: Option<usize>,
    pub base: GraphSummary,
    pub time_directed: Option<GraphSummary>,
}

/// Result structure for the `word` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordReport {
    pub word: String,
    pub synsets: Vec<SynsetKey>,
    pub earliest_year: Option<i32>,
    pub base_node: NodeId,
    pub time_directed_node: Option<NodeId>,
    pub time_directed_year: Option<i32>,
    pub out_degree: usize,
    pub in_degree: usize,
}

/// One edge in an [`EdgeReport`].
#[derive(Debug, Serialize, Deserialize)]
pub struct EdgeEntry {
    pub symbol: String,
    pub weight: f64,
}

/// Result structure for the `edge` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct EdgeReport {
    pub graph: GraphKind,
    pub source: NodeId,
    pub target: NodeId,
    pub edges: Vec<EdgeEntry>,
    /// Symbols on the edges running the other way.
    pub reverse_symbols: Vec<String>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LexigraphArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &LexigraphArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!("{}", "═".repeat(message.chars().count()));
    }

    let value = serde_json::to_value(result)?;
    for line in human_lines(&value, 0) {
        println!("{line}");
    }
    Ok(())
}

/// Render a JSON value as indented `key: value` lines.
fn human_lines(value: &serde_json::Value, indent: usize) -> Vec<String> {
    let spaces = "  ".repeat(indent);
    let mut lines = Vec::new();

    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let label = key.replace('_', " ");
                match val {
                    serde_json::Value::Object(inner) if !is_node_id(inner) => {
                        lines.push(format!("{spaces}{label}:"));
                        lines.extend(human_lines(val, indent + 1));
                    }
                    serde_json::Value::Array(items) if items.iter().any(|i| i.is_object()) => {
                        lines.push(format!("{spaces}{label}:"));
                        for item in items {
                            lines.push(format!("{spaces}  - {}", format_value(item)));
                        }
                    }
                    _ => lines.push(format!("{spaces}{label}: {}", format_value(val))),
                }
            }
        }
        _ => lines.push(format!("{spaces}{}", format_value(value))),
    }
    lines
}

fn is_node_id(obj: &serde_json::Map<String, serde_json::Value>) -> bool {
    obj.len() == 2 && obj.contains_key("kind") && obj.contains_key("id")
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexigraphArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(obj) if is_node_id(obj) => {
            format!("{}:{}", format_value(&obj["kind"]), format_value(&obj["id"]))
        }
        serde_json::Value::Object(obj) => obj
            .iter()
            .map(|(key, val)| format!("{key}={}", format_value(val)))
            .collect::<Vec<_>>()
            .join(" "),
        serde_json::Value::Null => "-".to_string(),
    }
}
