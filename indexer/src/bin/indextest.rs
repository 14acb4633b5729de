use anyhow::{Context, Result};
use clap::Parser;
use engine::{load_index_file, save_index_file};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Load an index file and write it back out, to check the file format round trip.
#[derive(Parser)]
#[command(name = "indextest")]
struct Cli {
    /// Index file produced by the indexer
    old_index_filename: PathBuf,
    /// Where to write the reloaded index
    new_index_filename: PathBuf,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let index = load_index_file(&cli.old_index_filename)
        .with_context(|| format!("failed to load index from '{}'", cli.old_index_filename.display()))?;
    save_index_file(&index, &cli.new_index_filename)
        .with_context(|| format!("cannot write index to '{}'", cli.new_index_filename.display()))?;

    println!(
        "Loaded {} words from {} and saved them to {}",
        index.num_words(),
        cli.old_index_filename.display(),
        cli.new_index_filename.display()
    );
    Ok(())
}
