use anyhow::{Context, Result};
use engine::{evaluate, load_index_file, parse_query, print_ranked, DocResolver, Index, PageDir};
use std::io::{BufRead, Write};
use std::path::Path;

pub const PROMPT: &str = "Query? ";

/// What happened to the lines of one session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub answered: usize,
    pub rejected: usize,
    pub blank: usize,
}

/// A loaded index plus the page directory used to turn doc ids into URLs.
pub struct Querier<R = PageDir> {
    index: Index,
    resolver: R,
}

impl Querier<PageDir> {
    /// Validate the page directory and load the index file.
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(page_directory: P, index_file: Q) -> Result<Self> {
        let page_directory = page_directory.as_ref();
        let index_file = index_file.as_ref();
        let dir = PageDir::open(page_directory)
            .with_context(|| format!("invalid page directory '{}'", page_directory.display()))?;
        let index = load_index_file(index_file)
            .with_context(|| format!("cannot load index '{}'", index_file.display()))?;
        tracing::info!(words = index.num_words(), index = %index_file.display(), "index loaded");
        Ok(Self::new(index, dir))
    }
}

impl<R: DocResolver> Querier<R> {
    pub fn new(index: Index, resolver: R) -> Self { Self { index, resolver } }

    pub fn index(&self) -> &Index { &self.index }

    /// Answer one query per input line until end of input.
    ///
    /// Bad queries are reported on `errors` and skipped. Only I/O failures and
    /// unresolvable documents end the session early.
    pub fn run<I, O, E>(&self, mut input: I, out: &mut O, errors: &mut E, prompt: bool) -> Result<SessionStats>
    where
        I: BufRead,
        O: Write,
        E: Write,
    {
        let mut stats = SessionStats::default();
        let mut buf = Vec::new();
        loop {
            if prompt {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }
            buf.clear();
            if input.read_until(b'\n', &mut buf).context("cannot read query")? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            match parse_query(&line) {
                Ok(Some(query)) => {
                    writeln!(out, "Query: {query}")?;
                    let result = evaluate(&self.index, &query);
                    tracing::debug!(%query, matches = result.len(), "evaluated query");
                    print_ranked(out, &result, &self.resolver)
                        .with_context(|| format!("cannot report results for '{query}'"))?;
                    writeln!(out)?;
                    stats.answered += 1;
                }
                Ok(None) => stats.blank += 1,
                Err(e) => {
                    writeln!(errors, "Error: {e}")?;
                    stats.rejected += 1;
                }
            }
        }
        if prompt {
            writeln!(out)?;
        }
        out.flush()?;
        Ok(stats)
    }
}
