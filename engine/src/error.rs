use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::DocId;

/// Failures while reading or writing an index file.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("I/O error on index file: {0}")]
    Io(#[from] io::Error),

    #[error("cannot open index file '{path}': {source}")]
    File { path: PathBuf, source: io::Error },

    #[error("line {line}: word is {len} bytes, longer than the {max}-byte limit")]
    WordTooLong { line: usize, len: usize, max: usize },

    #[error("line {line}: {reason}")]
    Format { line: usize, reason: String },
}

impl IndexError {
    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        IndexError::Format { line, reason: reason.into() }
    }
}

/// Failures while reading the crawler's page directory.
#[derive(Error, Debug)]
pub enum PageDirError {
    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),

    #[error("'{0}' has no .crawler marker; not produced by the crawler")]
    MissingMarker(PathBuf),

    #[error("'{0}' contains no document 1")]
    MissingFirstDoc(PathBuf),

    #[error("document {0} not found")]
    DocNotFound(DocId),

    #[error("document {doc_id}: {reason}")]
    MalformedPage { doc_id: DocId, reason: String },

    #[error("I/O error on '{path}': {source}")]
    Io { path: PathBuf, source: io::Error },
}

/// Reasons a single query line is rejected. None of these are fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("bad character '{0}' in query")]
    BadCharacter(char),

    #[error("'{0}' cannot be the only word in a query")]
    LoneOperator(String),

    #[error("'{0}' cannot be first")]
    LeadingOperator(String),

    #[error("'{0}' cannot be last")]
    TrailingOperator(String),

    #[error("'{0}' and '{1}' cannot be adjacent")]
    AdjacentOperators(String, String),
}

/// Failures while printing ranked results.
#[derive(Error, Debug)]
pub enum PrintError {
    #[error("cannot resolve matching document: {0}")]
    Resolve(#[from] PageDirError),

    #[error("cannot write results: {0}")]
    Io(#[from] io::Error),
}
