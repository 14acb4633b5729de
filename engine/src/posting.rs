use crate::DocId;
use std::collections::HashMap;

/// Occurrence counts of a single word, keyed by document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingMap {
    counts: HashMap<DocId, u32>,
}

impl PostingMap {
    pub fn new() -> Self { Self::default() }

    /// Bump the count for `doc_id`, starting from zero. Saturates at `u32::MAX`.
    pub fn increment(&mut self, doc_id: DocId) {
        let count = self.counts.entry(doc_id).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Overwrite the count for `doc_id`.
    pub fn set(&mut self, doc_id: DocId, score: u32) {
        self.counts.insert(doc_id, score);
    }

    /// Score for `doc_id`, 0 when absent.
    pub fn get(&self, doc_id: DocId) -> u32 {
        self.counts.get(&doc_id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize { self.counts.len() }

    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (DocId, u32)> + '_ {
        self.counts.iter().map(|(&d, &s)| (d, s))
    }

    /// Documents present in both maps, scored by the smaller of the two counts.
    pub fn intersect_min(&self, other: &PostingMap) -> PostingMap {
        // walk the smaller map, probe the larger
        let (small, large) = if self.len() <= other.len() { (self, other) } else { (other, self) };
        small
            .counts
            .iter()
            .filter_map(|(&doc, &a)| large.counts.get(&doc).map(|&b| (doc, a.min(b))))
            .collect()
    }

    /// Union with `other`; scores of documents present in both are summed,
    /// saturating at `u32::MAX`.
    pub fn merge_sum(&mut self, other: &PostingMap) {
        for (&doc, &score) in &other.counts {
            let total = self.counts.entry(doc).or_insert(0);
            *total = total.saturating_add(score);
        }
    }

    /// Matching documents, best first. Score-0 entries are skipped and ties
    /// fall back to ascending doc id.
    pub fn ranked(&self) -> Vec<(DocId, u32)> {
        let mut hits: Vec<(DocId, u32)> = self.iter().filter(|&(_, s)| s > 0).collect();
        hits.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        hits
    }

    /// Highest score held by any document, 0 for an empty map.
    pub fn max_score(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0)
    }
}

impl FromIterator<(DocId, u32)> for PostingMap {
    fn from_iter<I: IntoIterator<Item = (DocId, u32)>>(iter: I) -> Self {
        PostingMap { counts: iter.into_iter().collect() }
    }
}
