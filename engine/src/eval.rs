use crate::{Index, PostingMap, Query};

/// Score every document against `query`.
///
/// AND binds tighter than OR: each AND-sequence is the min-intersection of its
/// terms, and the sequences are unioned by summing their scores.
pub fn evaluate(index: &Index, query: &Query) -> PostingMap {
    let mut result = PostingMap::new();
    for seq in query.and_sequences() {
        result.merge_sum(&evaluate_and(index, &seq));
    }
    result
}

/// Intersect the postings of `terms`, left to right.
pub fn evaluate_and(index: &Index, terms: &[&str]) -> PostingMap {
    let Some((first, rest)) = terms.split_first() else {
        return PostingMap::new();
    };
    let mut acc = index.get(first).cloned().unwrap_or_default();
    for term in rest {
        if acc.is_empty() {
            break;
        }
        acc = match index.get(term) {
            Some(postings) => acc.intersect_min(postings),
            // one missing term means nothing can match
            None => PostingMap::new(),
        };
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_query;

    fn sample() -> Index {
        let mut idx = Index::new();
        idx.set_count("rust", 1, 2);
        idx.set_count("rust", 2, 1);
        idx.set_count("go", 1, 1);
        idx.set_count("go", 3, 4);
        idx
    }

    fn run(idx: &Index, line: &str) -> PostingMap {
        evaluate(idx, &parse_query(line).unwrap().unwrap())
    }

    fn map(pairs: &[(u32, u32)]) -> PostingMap { pairs.iter().copied().collect() }

    #[test]
    fn and_is_min_intersection() {
        let idx = sample();
        assert_eq!(run(&idx, "rust and go"), map(&[(1, 1)]));
        assert_eq!(run(&idx, "go rust"), map(&[(1, 1)]));
    }

    #[test]
    fn or_sums_scores() {
        assert_eq!(run(&sample(), "rust or go"), map(&[(1, 3), (2, 1), (3, 4)]));
    }

    #[test]
    fn missing_term_empties_its_sequence_only() {
        let idx = sample();
        assert!(run(&idx, "rust and kotlin").is_empty());
        assert!(run(&idx, "kotlin and rust").is_empty());
        assert_eq!(run(&idx, "rust kotlin or go"), map(&[(1, 1), (3, 4)]));
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let idx = sample();
        // (go) or (rust and go)
        assert_eq!(run(&idx, "go or rust and go"), map(&[(1, 2), (3, 4)]));
    }

    #[test]
    fn repeated_sequences_add_up() {
        assert_eq!(run(&sample(), "rust or rust"), map(&[(1, 4), (2, 2)]));
    }

    #[test]
    fn huge_counts_saturate_across_sequences() {
        let idx = crate::load_index("rust 1 4294967295\n".as_bytes()).unwrap();
        assert_eq!(run(&idx, "rust or rust"), map(&[(1, u32::MAX)]));
    }

    #[test]
    fn no_terms_no_matches() {
        assert!(evaluate_and(&sample(), &[]).is_empty());
    }
}
