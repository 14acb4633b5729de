use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG: Regex = Regex::new(r"<[^>]*>?").expect("valid regex");
    static ref WORD: Regex = Regex::new(r"[A-Za-z]+").expect("valid regex");
}

/// Scan raw page content for candidate words: maximal runs of ASCII letters
/// outside of `<...>` markup. Words are returned as they appear in the page;
/// case folding and length filtering are left to the caller.
pub fn words(html: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut last = 0;
    for tag in TAG.find_iter(html) {
        out.extend(WORD.find_iter(&html[last..tag.start()]).map(|m| m.as_str()));
        last = tag.end();
    }
    out.extend(WORD.find_iter(&html[last..]).map(|m| m.as_str()));
    out
}
