//! CLI entry point for ranking a corpus of HTML pages

use clap::Parser;
use pagerank::io::cli::{Cli, RankProcessor};

// Allow print for the rank tables, which are the program's output
#[allow(clippy::print_stdout)]
fn main() -> pagerank::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut processor = RankProcessor::new(cli);
    let report = processor.process()?;
    print!("{report}");
    Ok(())
}
