//! Command implementations for the lexigraph CLI.

use tracing::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{LexigraphError, Result};
use crate::graph::{GraphSummary, LexicalGraph, NodeId};
use crate::pipeline::LexicalNetwork;

/// Execute a CLI command.
pub fn execute_command(args: LexigraphArgs) -> Result<()> {
    match &args.command {
        Command::Stats(stats_args) => show_stats(stats_args, &args),
        Command::Synset(synset_args) => show_synset(synset_args, &args),
        Command::Word(word_args) => show_word(word_args, &args),
        Command::Edge(edge_args) => show_edges(edge_args, &args),
    }
}

fn load_network(source: &SourceArgs) -> Result<LexicalNetwork> {
    let config = source.to_config()?;
    info!(files = config.data_files.len(), "building lexical network");
    LexicalNetwork::build(&config)
}

/// Show graph statistics.
fn show_stats(args: &StatsArgs, cli_args: &LexigraphArgs) -> Result<()> {
    let network = load_network(&args.source)?;
    let report = stats_report(&network, args.words_only);
    output_result("Lexical network statistics", &report, cli_args)
}

pub(crate) fn stats_report(network: &LexicalNetwork, words_only: bool) -> NetworkStats {
    let summarize = |graph: &LexicalGraph| {
        if words_only {
            GraphSummary::of(&graph.without_supernodes())
        } else {
            GraphSummary::of(graph)
        }
    };

    NetworkStats {
        synsets: network.registry().len(),
        distinct_words: network.registry().distinct_words().len(),
        parts_of_speech: network.parts_of_speech().iter().copied().collect(),
        dated_entries: network.time_table().map(|table| table.len()),
        base: summarize(network.graph()),
        time_directed: network.time_directed_graph().map(summarize),
    }
}

/// Show one synset.
fn show_synset(args: &SynsetArgs, cli_args: &LexigraphArgs) -> Result<()> {
    let network = load_network(&args.source)?;
    let synset = network
        .registry()
        .get(args.key)
        .ok_or_else(|| LexigraphError::not_found(format!("synset {}", args.key)))?;
    output_result(&format!("Synset {}", args.key), synset, cli_args)
}

/// Show everything known about a word.
fn show_word(args: &WordArgs, cli_args: &LexigraphArgs) -> Result<()> {
    let network = load_network(&args.source)?;
    let report = word_report(&network, &args.word)?;
    output_result(&format!("Word '{}'", args.word), &report, cli_args)
}

pub(crate) fn word_report(network: &LexicalNetwork, word: &str) -> Result<WordReport> {
    let base_node = network
        .graph()
        .word_node(word)
        .ok_or_else(|| LexigraphError::not_found(format!("word '{word}'")))?;
    let time_node = network
        .time_directed_graph()
        .and_then(|graph| graph.word_node(word));

    Ok(WordReport {
        word: word.to_string(),
        synsets: network.registry().synsets_of(word).to_vec(),
        earliest_year: network
            .time_table()
            .and_then(|table| table.earliest_year(word)),
        base_node,
        time_directed_node: time_node,
        time_directed_year: time_node.and_then(|node| {
            network
                .time_directed_graph()
                .and_then(|graph| graph.year(node))
        }),
        out_degree: network.graph().out_edges(base_node).len(),
        in_degree: network.graph().in_edges(base_node).len(),
    })
}

/// Show the edges between two nodes.
fn show_edges(args: &EdgeArgs, cli_args: &LexigraphArgs) -> Result<()> {
    let network = load_network(&args.source)?;
    let report = edge_report(&network, args)?;
    output_result(
        &format!("Edges from {} to {}", args.from, args.to),
        &report,
        cli_args,
    )
}

pub(crate) fn edge_report(network: &LexicalNetwork, args: &EdgeArgs) -> Result<EdgeReport> {
    let graph = match args.graph {
        GraphKind::Base => network.graph(),
        GraphKind::Time => network.time_directed_graph().ok_or_else(|| {
            LexigraphError::config("the time-directed graph needs a time data file")
        })?,
    };
    let source = resolve_node(graph, &args.from)?;
    let target = resolve_node(graph, &args.to)?;

    let edges = graph
        .edges_between(source, target)
        .into_iter()
        .map(|edge| EdgeEntry {
            symbol: edge.symbol.to_string(),
            weight: edge.weight,
        })
        .collect();

    Ok(EdgeReport {
        graph: args.graph,
        source,
        target,
        edges,
        reverse_symbols: graph
            .edges_between(target, source)
            .into_iter()
            .map(|edge| edge.symbol.to_string())
            .collect(),
    })
}

/// Accept `synset:KEY`, `word:ID` or a plain word.
fn resolve_node(graph: &LexicalGraph, text: &str) -> Result<NodeId> {
    let node = match text.parse::<NodeId>() {
        Ok(node) => Some(node).filter(|node| graph.contains_node(*node)),
        Err(_) => graph.word_node(text),
    };
    node.ok_or_else(|| LexigraphError::not_found(format!("node '{text}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chronology::TimeTable;
    use crate::lexicon::{PartOfSpeech, RecordDecoder, SynsetRegistry};

    fn network() -> LexicalNetwork {
        let registry = SynsetRegistry::from_synsets(
            [
                "00000001 05 n 02 cat 0 feline 0 001 @ 00000002 n 0000 | a small carnivore",
                "00000002 05 n 01 dog 0 000 | a domesticated carnivore",
            ]
            .iter()
            .map(|line| RecordDecoder::decode_line(line).unwrap()),
            [PartOfSpeech::Noun],
        );
        let table = TimeTable::parse(
            "cat <delim> n <delim> 1200\nfeline <delim> n <delim> 1681\n",
            crate::chronology::DEFAULT_DELIMITER,
        )
        .unwrap();
        LexicalNetwork::from_parts(registry, Some(table), [PartOfSpeech::Noun].into()).unwrap()
    }

    fn edge_args(from: &str, to: &str, graph: GraphKind) -> EdgeArgs {
        EdgeArgs {
            source: SourceArgs::default(),
            from: from.to_string(),
            to: to.to_string(),
            graph,
        }
    }

    #[test]
    fn test_stats_report() {
        let network = network();
        let report = stats_report(&network, false);

        assert_eq!(report.synsets, 2);
        assert_eq!(report.distinct_words, 3);
        assert_eq!(report.parts_of_speech, vec![PartOfSpeech::Noun]);
        assert_eq!(report.base.directed_edges, 9);
        let time_directed = report.time_directed.unwrap();
        assert_eq!(time_directed.word_nodes, 2);
        assert_eq!(time_directed.supernodes, 1);

        let report = stats_report(&network, true);
        assert_eq!(report.base.supernodes, 0);
        assert_eq!(report.base.directed_edges, 2);
    }

    #[test]
    fn test_word_report() {
        let network = network();
        let report = word_report(&network, "cat").unwrap();

        assert_eq!(report.synsets, vec![100_000_001]);
        assert_eq!(report.earliest_year, Some(1200));
        assert_eq!(report.base_node, NodeId::Word(0));
        assert_eq!(report.time_directed_year, Some(1200));
        // synset membership plus the synonym
        assert_eq!(report.out_degree, 2);

        let report = word_report(&network, "dog").unwrap();
        assert_eq!(report.time_directed_node, None);

        assert!(word_report(&network, "unicorn").is_err());
    }

    #[test]
    fn test_edge_report() {
        let network = network();

        let report = edge_report(&network, &edge_args("cat", "feline", GraphKind::Time)).unwrap();
        assert_eq!(report.edges.len(), 1);
        assert_eq!(report.edges[0].symbol, "synonym");
        assert!(report.reverse_symbols.is_empty());

        let report = edge_report(
            &network,
            &edge_args("synset:100000001", "synset:100000002", GraphKind::Base),
        )
        .unwrap();
        assert_eq!(report.edges[0].symbol, "@");

        assert!(edge_report(&network, &edge_args("cat", "synset:42", GraphKind::Base)).is_err());
    }
}
