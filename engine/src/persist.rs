//! Text format of the index file.
//!
//! One line per word: `word docID count docID count ...`, space separated.
//! Lines are written in word order with pairs in doc id order so that two
//! saves of the same index are byte-identical; readers must not depend on it.

use crate::{DocId, Index, IndexError};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Longest word accepted when loading an index file.
pub const MAX_WORD_LEN: usize = 100;

pub fn save_index<W: Write>(index: &Index, out: &mut W) -> Result<(), IndexError> {
    for word in index.words() {
        let Some(postings) = index.get(word) else { continue };
        let mut pairs: Vec<(DocId, u32)> = postings.iter().filter(|&(_, c)| c > 0).collect();
        if pairs.is_empty() {
            continue;
        }
        pairs.sort_unstable_by_key(|&(doc, _)| doc);
        write!(out, "{word}")?;
        for (doc, count) in pairs {
            write!(out, " {doc} {count}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Parse an index file. Any malformed line fails the whole load.
pub fn load_index<R: BufRead>(input: R) -> Result<Index, IndexError> {
    let mut index = Index::new();
    for (n, line) in input.lines().enumerate() {
        let line = line?;
        parse_line(&mut index, &line, n + 1)?;
    }
    Ok(index)
}

fn parse_line(index: &mut Index, line: &str, line_no: usize) -> Result<(), IndexError> {
    let mut fields = line.split_ascii_whitespace();
    let Some(word) = fields.next() else { return Ok(()) };
    if word.len() > MAX_WORD_LEN {
        return Err(IndexError::WordTooLong { line: line_no, len: word.len(), max: MAX_WORD_LEN });
    }

    let rest: Vec<&str> = fields.collect();
    if rest.is_empty() {
        return Err(IndexError::format(line_no, format!("word '{word}' has no postings")));
    }
    if rest.len() % 2 != 0 {
        let dangling = rest[rest.len() - 1];
        return Err(IndexError::format(line_no, format!("doc id {dangling} has no count")));
    }

    for pair in rest.chunks_exact(2) {
        let doc_id: DocId = parse_field(pair[0], "doc id", line_no)?;
        let count: u32 = parse_field(pair[1], "count", line_no)?;
        if doc_id == 0 {
            return Err(IndexError::format(line_no, "doc id 0 is not a valid document"));
        }
        // a zero count is well formed but carries no occurrence
        if count > 0 {
            index.set_count(word, doc_id, count);
        }
    }
    Ok(())
}

fn parse_field(field: &str, what: &str, line_no: usize) -> Result<u32, IndexError> {
    field
        .parse::<u32>()
        .map_err(|_| IndexError::format(line_no, format!("'{field}' is not a valid {what}")))
}

pub fn save_index_file<P: AsRef<Path>>(index: &Index, path: P) -> Result<(), IndexError> {
    let path = path.as_ref();
    let f = File::create(path).map_err(|source| IndexError::File { path: path.to_path_buf(), source })?;
    let mut out = BufWriter::new(f);
    save_index(index, &mut out)?;
    out.flush()?;
    tracing::debug!(path = %path.display(), words = index.num_words(), "saved index");
    Ok(())
}

pub fn load_index_file<P: AsRef<Path>>(path: P) -> Result<Index, IndexError> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|source| IndexError::File { path: path.to_path_buf(), source })?;
    let index = load_index(BufReader::new(f))?;
    tracing::debug!(path = %path.display(), words = index.num_words(), "loaded index");
    Ok(index)
}
