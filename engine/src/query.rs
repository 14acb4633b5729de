use crate::QueryError;
use std::fmt;

pub const AND: &str = "and";
pub const OR: &str = "or";

pub fn is_operator(word: &str) -> bool { word == AND || word == OR }

/// A validated query: lowercase alphabetic words with well-placed operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    words: Vec<String>,
}

impl Query {
    pub fn words(&self) -> &[String] { &self.words }

    /// Split on `or` into AND-sequences, dropping the `and` separators.
    pub fn and_sequences(&self) -> Vec<Vec<&str>> {
        self.words
            .split(|w| w == OR)
            .map(|seq| seq.iter().map(String::as_str).filter(|w| *w != AND).collect())
            .collect()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

/// Validate one line of input. `Ok(None)` means the line held no words.
pub fn parse_query(line: &str) -> Result<Option<Query>, QueryError> {
    if let Some(bad) = line.chars().find(|c| !c.is_ascii_alphabetic() && !c.is_ascii_whitespace()) {
        return Err(QueryError::BadCharacter(bad));
    }

    let words: Vec<String> = line.split_ascii_whitespace().map(|w| w.to_ascii_lowercase()).collect();
    let (Some(first), Some(last)) = (words.first(), words.last()) else {
        return Ok(None);
    };

    if words.len() == 1 {
        if is_operator(first) {
            return Err(QueryError::LoneOperator(first.clone()));
        }
    } else {
        if is_operator(first) {
            return Err(QueryError::LeadingOperator(first.clone()));
        }
        if is_operator(last) {
            return Err(QueryError::TrailingOperator(last.clone()));
        }
    }

    if let Some(pair) = words.windows(2).find(|p| is_operator(&p[0]) && is_operator(&p[1])) {
        return Err(QueryError::AdjacentOperators(pair[0].clone(), pair[1].clone()));
    }

    Ok(Some(Query { words }))
}
