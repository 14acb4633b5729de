use crate::{DocId, PostingMap};
use std::collections::HashMap;

/// Inverted index: normalized word to the documents it occurs in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    words: HashMap<String, PostingMap>,
}

impl Index {
    pub fn new() -> Self { Self::default() }

    pub fn with_capacity(num_words: usize) -> Self {
        Self { words: HashMap::with_capacity(num_words) }
    }

    /// Record one occurrence of `word` in `doc_id`.
    ///
    /// Empty words and doc id 0 are ignored rather than reported; the
    /// ingestion pipeline is best effort.
    pub fn add_occurrence(&mut self, word: &str, doc_id: DocId) {
        if word.is_empty() || doc_id < 1 {
            return;
        }
        self.postings_mut(word).increment(doc_id);
    }

    /// Overwrite the count of `word` in `doc_id`.
    pub fn set_count(&mut self, word: &str, doc_id: DocId, count: u32) {
        if word.is_empty() || doc_id < 1 {
            return;
        }
        self.postings_mut(word).set(doc_id, count);
    }

    pub fn get(&self, word: &str) -> Option<&PostingMap> { self.words.get(word) }

    pub fn num_words(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    /// Words with at least one posting, in ascending order.
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .words
            .iter()
            .filter(|(_, p)| !p.is_empty())
            .map(|(w, _)| w.as_str())
            .collect();
        words.sort_unstable();
        words
    }

    fn postings_mut(&mut self, word: &str) -> &mut PostingMap {
        self.words.entry(word.to_string()).or_default()
    }
}
