use anyhow::{Context, Result};
use clap::Parser;
use engine::indexing::index_pages;
use engine::{save_index_file, PageDir};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build an inverted index from a crawler page directory", long_about = None)]
struct Cli {
    /// Directory written by the crawler (must contain a .crawler marker)
    page_directory: PathBuf,
    /// Index file to create or overwrite
    index_filename: PathBuf,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let dir = PageDir::open(&cli.page_directory)
        .with_context(|| format!("invalid page directory '{}'", cli.page_directory.display()))?;
    let index = index_pages(&dir).context("failed to build the index")?;
    save_index_file(&index, &cli.index_filename)
        .with_context(|| format!("cannot write index to '{}'", cli.index_filename.display()))?;

    tracing::info!(output = %cli.index_filename.display(), words = index.num_words(), "index build complete");
    println!("Indexer has successfully completed.");
    Ok(())
}
