use engine::indexing::index_pages;
use engine::{evaluate, parse_query, print_ranked, DocResolver, Index, Page, PageDir, PageDirError, PostingMap};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn page(url: &str, html: &str) -> Page {
    Page { url: url.to_string(), depth: 0, html: html.to_string() }
}

fn write_corpus(root: &Path, pages: &[(u32, Page)]) -> PageDir {
    let dir = PageDir::init(root).unwrap();
    for (doc_id, p) in pages {
        dir.save(p, *doc_id).unwrap();
    }
    dir
}

fn run(index: &Index, line: &str) -> PostingMap {
    evaluate(index, &parse_query(line).unwrap().unwrap())
}

#[test]
fn builds_index_from_page_directory() {
    let tmp = tempdir().unwrap();
    write_corpus(
        tmp.path(),
        &[
            (1, page("http://site.test/", "<h1>Rust</h1> rust RUST go")),
            (2, page("http://site.test/a", "<p>Rust and Python</p>")),
        ],
    );
    let dir = PageDir::open(tmp.path()).unwrap();
    let index = index_pages(&dir).unwrap();

    assert_eq!(index.get("rust").unwrap().get(1), 3);
    assert_eq!(index.get("rust").unwrap().get(2), 1);
    assert_eq!(index.get("python").unwrap().get(2), 1);
    // "go" is below the length threshold
    assert!(index.get("go").is_none());
}

#[test]
fn a_gap_ends_the_corpus() {
    let tmp = tempdir().unwrap();
    write_corpus(
        tmp.path(),
        &[
            (1, page("http://site.test/1", "alpha")),
            (2, page("http://site.test/2", "beta")),
            (4, page("http://site.test/4", "delta")),
        ],
    );
    let index = index_pages(&PageDir::open(tmp.path()).unwrap()).unwrap();
    assert!(index.get("alpha").is_some());
    assert!(index.get("beta").is_some());
    assert!(index.get("delta").is_none());
}

#[test]
fn open_rejects_non_crawler_directories() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("1"), "http://site.test/\n0\nhi").unwrap();
    assert!(matches!(PageDir::open(tmp.path()), Err(PageDirError::MissingMarker(_))));

    let empty = tempdir().unwrap();
    PageDir::init(empty.path()).unwrap();
    assert!(matches!(PageDir::open(empty.path()), Err(PageDirError::MissingFirstDoc(_))));

    let file = tmp.path().join("1");
    assert!(matches!(PageDir::open(&file), Err(PageDirError::NotADirectory(_))));
}

#[test]
fn resolves_urls_from_first_line() {
    let tmp = tempdir().unwrap();
    let dir = write_corpus(tmp.path(), &[(1, page("http://site.test/home", "<p>x</p>"))]);
    assert_eq!(dir.resolve_url(1).unwrap(), "http://site.test/home");
    assert!(matches!(dir.resolve_url(2), Err(PageDirError::DocNotFound(2))));
}

#[test]
fn malformed_page_fails_the_build() {
    let tmp = tempdir().unwrap();
    let dir = write_corpus(tmp.path(), &[(1, page("http://site.test/", "fine"))]);
    fs::write(dir.root().join("2"), "http://site.test/b\nnot-a-number\nbody").unwrap();
    assert!(matches!(index_pages(&dir), Err(PageDirError::MalformedPage { doc_id: 2, .. })));
}

#[test]
fn pages_that_are_not_utf8_still_index() {
    let tmp = tempdir().unwrap();
    let dir = write_corpus(tmp.path(), &[(2, page("http://site.test/2", "rust"))]);
    fs::write(dir.root().join("1"), b"http://site.test/\n0\n<p>caf\xE9 rust</p>").unwrap();

    let index = index_pages(&dir).unwrap();
    assert_eq!(index.get("rust").unwrap().get(1), 1);
    assert_eq!(index.get("rust").unwrap().get(2), 1);
    assert_eq!(index.get("caf").unwrap().get(1), 1);
    assert_eq!(dir.resolve_url(1).unwrap(), "http://site.test/");
}

#[test]
fn end_to_end_ranking() {
    let tmp = tempdir().unwrap();
    let dir = write_corpus(
        tmp.path(),
        &[
            (1, page("http://site.test/1", "")),
            (2, page("http://site.test/2", "")),
            (3, page("http://site.test/3", "")),
        ],
    );

    let mut index = Index::new();
    index.set_count("rust", 1, 2);
    index.set_count("rust", 2, 1);
    index.set_count("go", 1, 1);
    index.set_count("go", 3, 4);

    let and: PostingMap = [(1, 1)].into_iter().collect();
    assert_eq!(run(&index, "rust and go"), and);

    let or = run(&index, "rust or go");
    let expected: PostingMap = [(1, 3), (2, 1), (3, 4)].into_iter().collect();
    assert_eq!(or, expected);

    let mut out = Vec::new();
    assert_eq!(print_ranked(&mut out, &or, &dir).unwrap(), 3);
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Matches 3 documents (ranked):",
            "score 4 doc 3: http://site.test/3",
            "score 3 doc 1: http://site.test/1",
            "score 1 doc 2: http://site.test/2",
        ]
    );
}
