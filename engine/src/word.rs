/// Words shorter than this are never indexed.
pub const MIN_WORD_LEN: usize = 3;

/// Case-fold a token. Only ASCII letters change, so the byte length is preserved.
pub fn normalize_word(token: &str) -> String {
    token.to_ascii_lowercase()
}

/// Build-time filter applied before normalization.
pub fn is_indexable(token: &str) -> bool {
    token.len() >= MIN_WORD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_only() {
        assert_eq!(normalize_word("RuSt"), "rust");
        assert_eq!(normalize_word("Go-1.22!"), "go-1.22!");
        assert_eq!(normalize_word(""), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_word("Hello World");
        assert_eq!(normalize_word(&once), once);
    }

    #[test]
    fn length_policy() {
        assert!(!is_indexable("an"));
        assert!(is_indexable("the"));
        assert!(is_indexable("Rust"));
    }
}
