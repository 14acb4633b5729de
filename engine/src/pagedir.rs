//! Read access to the crawler's page directory.
//!
//! Layout: a `.crawler` marker file plus one file per document, named by its
//! decimal doc id starting at 1 with no gaps. Each file holds the URL on line 1,
//! the crawl depth on line 2, and the raw page content after that.

use crate::{DocId, PageDirError};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

const MARKER: &str = ".crawler";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub url: String,
    pub depth: u32,
    pub html: String,
}

/// Anything that can turn a doc id back into the URL it was fetched from.
pub trait DocResolver {
    fn resolve_url(&self, doc_id: DocId) -> Result<String, PageDirError>;
}

#[derive(Debug, Clone)]
pub struct PageDir {
    root: PathBuf,
}

impl PageDir {
    /// Open an existing page directory, checking that the crawler produced it.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, PageDirError> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(PageDirError::NotADirectory(root));
        }
        if !root.join(MARKER).is_file() {
            return Err(PageDirError::MissingMarker(root));
        }
        if !root.join("1").is_file() {
            return Err(PageDirError::MissingFirstDoc(root));
        }
        Ok(Self { root })
    }

    /// Create the directory if needed and mark it as crawler output.
    pub fn init<P: AsRef<Path>>(root: P) -> Result<Self, PageDirError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|source| PageDirError::Io { path: root.clone(), source })?;
        let marker = root.join(MARKER);
        File::create(&marker).map_err(|source| PageDirError::Io { path: marker, source })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path { &self.root }

    fn doc_path(&self, doc_id: DocId) -> PathBuf { self.root.join(doc_id.to_string()) }

    pub fn save(&self, page: &Page, doc_id: DocId) -> Result<(), PageDirError> {
        let path = self.doc_path(doc_id);
        let body = format!("{}\n{}\n{}", page.url, page.depth, page.html);
        fs::write(&path, body).map_err(|source| PageDirError::Io { path, source })
    }

    /// Load document `doc_id`; `Ok(None)` once past the end of the corpus.
    ///
    /// Page content is raw bytes from the web; anything that is not UTF-8 is
    /// decoded lossily rather than failing the page.
    pub fn load(&self, doc_id: DocId) -> Result<Option<Page>, PageDirError> {
        let path = self.doc_path(doc_id);
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(PageDirError::Io { path, source }),
        };
        parse_page(&bytes, doc_id).map(Some)
    }
}

impl DocResolver for PageDir {
    fn resolve_url(&self, doc_id: DocId) -> Result<String, PageDirError> {
        let path = self.doc_path(doc_id);
        let f = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(PageDirError::DocNotFound(doc_id)),
            Err(source) => return Err(PageDirError::Io { path, source }),
        };
        let mut line = Vec::new();
        BufReader::new(f)
            .read_until(b'\n', &mut line)
            .map_err(|source| PageDirError::Io { path, source })?;
        let url = String::from_utf8_lossy(&line);
        let url = url.trim_end();
        if url.is_empty() {
            return Err(malformed(doc_id, "missing URL line"));
        }
        Ok(url.to_string())
    }
}

fn parse_page(bytes: &[u8], doc_id: DocId) -> Result<Page, PageDirError> {
    let mut parts = bytes.splitn(3, |&b| b == b'\n');
    let url = String::from_utf8_lossy(parts.next().unwrap_or_default());
    let url = url.trim_end();
    if url.is_empty() {
        return Err(malformed(doc_id, "missing URL line"));
    }
    let depth_line = parts.next().ok_or_else(|| malformed(doc_id, "missing depth line"))?;
    let depth_line = String::from_utf8_lossy(depth_line);
    let depth = depth_line
        .trim()
        .parse::<u32>()
        .map_err(|_| malformed(doc_id, format!("depth '{}' is not an integer", depth_line.trim())))?;
    let html = String::from_utf8_lossy(parts.next().unwrap_or_default()).into_owned();
    Ok(Page { url: url.to_string(), depth, html })
}

fn malformed(doc_id: DocId, reason: impl Into<String>) -> PageDirError {
    PageDirError::MalformedPage { doc_id, reason: reason.into() }
}
