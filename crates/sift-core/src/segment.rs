//! Sentence segmentation

use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations that end in a period without ending the sentence, lower-cased
/// and without the final period
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "vs", "etc", "e.g", "i.e",
    "u.s", "u.k", "u.n", "inc", "ltd", "co", "corp", "gen", "gov", "sen", "rep", "rev", "lt",
    "col", "capt", "sgt", "jan", "feb", "aug", "sept", "oct", "nov", "dec", "approx", "ca",
];

/// Split a document into sentences, in document order.
///
/// Lines are treated as passages; each passage is split on Unicode sentence
/// boundaries (UAX #29). A boundary right after a known abbreviation or a
/// single-letter initial ("Dr.", "U.S.", "J.") is not a sentence end, so
/// that segment is joined with the one after it. Sentences are trimmed and
/// blanks dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    for passage in text.split('\n') {
        let mut start: Option<usize> = None;
        for (offset, segment) in passage.split_sentence_bound_indices() {
            let begin = start.unwrap_or(offset);
            if ends_with_abbreviation(segment) {
                start = Some(begin);
                continue;
            }
            sentences.push(&passage[begin..offset + segment.len()]);
            start = None;
        }
        if let Some(begin) = start {
            sentences.push(&passage[begin..]);
        }
    }

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

fn ends_with_abbreviation(segment: &str) -> bool {
    let Some(stem) = segment.trim_end().strip_suffix('.') else {
        return false;
    };
    let word = stem
        .rsplit(|c: char| c.is_whitespace() || matches!(c, '(' | '"' | '\''))
        .next()
        .unwrap_or(stem)
        .to_lowercase();

    let mut chars = word.chars();
    let initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());
    initial || ABBREVIATIONS.contains(&word.as_str())
}
