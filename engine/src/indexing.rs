use crate::tokenizer::words;
use crate::word::{is_indexable, normalize_word};
use crate::{DocId, Index, Page, PageDir, PageDirError};

/// Build an index over every page in `dir`.
///
/// Doc ids are visited from 1 upward and the scan ends at the first id with
/// no page file, so a gap hides everything after it.
pub fn index_pages(dir: &PageDir) -> Result<Index, PageDirError> {
    let mut index = Index::with_capacity(500);
    let mut doc_id: DocId = 1;
    while let Some(page) = dir.load(doc_id)? {
        let added = index_page(&mut index, &page, doc_id);
        tracing::debug!(doc_id, url = %page.url, words = added, "indexed page");
        doc_id += 1;
    }
    tracing::info!(num_docs = doc_id - 1, num_words = index.num_words(), "ingested pages");
    Ok(index)
}

/// Add the words of one page under `doc_id`; returns how many were counted.
pub fn index_page(index: &mut Index, page: &Page, doc_id: DocId) -> usize {
    let mut added = 0;
    for token in words(&page.html).into_iter().filter(|t| is_indexable(t)) {
        index.add_occurrence(&normalize_word(token), doc_id);
        added += 1;
    }
    added
}
