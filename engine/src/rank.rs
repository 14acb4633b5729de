use crate::{DocId, DocResolver, PostingMap, PrintError};
use std::io::Write;

pub const NO_MATCH: &str = "No documents match.";

/// Print matching documents from the highest score down, one per line as
/// `score <S> doc <id>: <url>`. Equal scores print in ascending doc id order.
///
/// Every URL is resolved before anything is written, so an unknown doc id
/// fails the whole report instead of leaving it half printed.
pub fn print_ranked<W, R>(out: &mut W, result: &PostingMap, resolver: &R) -> Result<usize, PrintError>
where
    W: Write,
    R: DocResolver + ?Sized,
{
    if result.max_score() == 0 {
        writeln!(out, "{NO_MATCH}")?;
        return Ok(0);
    }

    let lines = result
        .ranked()
        .iter()
        .map(|&(doc, score)| resolver.resolve_url(doc).map(|url| (doc, score, url)))
        .collect::<Result<Vec<(DocId, u32, String)>, _>>()?;

    writeln!(out, "Matches {} documents (ranked):", lines.len())?;
    for (doc, score, url) in &lines {
        writeln!(out, "score {score} doc {doc}: {url}")?;
    }
    Ok(lines.len())
}
