//! lexigraph CLI binary.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use lexigraph::cli::args::LexigraphArgs;
use lexigraph::cli::commands::execute_command;

fn main() -> anyhow::Result<()> {
    let args = LexigraphArgs::parse();

    // Logs go to stderr so JSON output on stdout stays parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("lexigraph={}", args.log_level()).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = args.command.name();
    execute_command(args).with_context(|| format!("lexigraph {command} failed"))
}
