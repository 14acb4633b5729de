use anyhow::Result;
use clap::Parser;
use querier::Querier;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "querier")]
#[command(about = "Answer boolean and/or queries read from stdin", long_about = None)]
struct Args {
    /// Directory written by the crawler
    page_directory: PathBuf,
    /// Index file written by the indexer
    index_filename: PathBuf,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();
    let querier = Querier::open(&args.page_directory, &args.index_filename)?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let stats = querier.run(stdin.lock(), &mut io::stdout().lock(), &mut io::stderr().lock(), interactive)?;
    tracing::info!(answered = stats.answered, rejected = stats.rejected, "session finished");
    Ok(())
}
