//! Sentence ranking by matched-word IDF, tie-broken by query-term density

use crate::corpus::Corpus;
use crate::error::Result;
use crate::idf::IdfTable;
use crate::tokenizer::Query;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence<'c> {
    pub id: &'c str,
    /// Sum of IDF over distinct query words present in the sentence
    pub idf_score: f64,
    /// Distinct matched query words per sentence token, in `[0, 1]`
    pub density: f64,
}

/// Score and order sentences.
///
/// Order is descending `idf_score`, then descending `density`, then corpus
/// insertion order. Sentences with no tokens are skipped.
pub fn rank_sentences<'c>(
    query: &Query,
    corpus: &'c Corpus,
    idf: &IdfTable,
) -> Result<Vec<ScoredSentence<'c>>> {
    let mut scored = Vec::with_capacity(corpus.len());

    for (id, tokens) in corpus.iter() {
        if tokens.is_empty() {
            continue;
        }

        let present: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        let mut idf_score = 0.0;
        let mut matched = 0usize;
        for word in query {
            if present.contains(word.as_str()) {
                idf_score += idf.weight(word)?;
                matched += 1;
            }
        }

        scored.push(ScoredSentence {
            id,
            idf_score,
            density: matched as f64 / tokens.len() as f64,
        });
    }

    scored.sort_by(|a, b| {
        b.idf_score
            .total_cmp(&a.idf_score)
            .then_with(|| b.density.total_cmp(&a.density))
    });
    Ok(scored)
}

/// The `n` best sentences, as their original text
pub fn top_sentences<'c>(
    query: &Query,
    corpus: &'c Corpus,
    idf: &IdfTable,
    n: usize,
) -> Result<Vec<&'c str>> {
    let mut ranked = rank_sentences(query, corpus, idf)?;
    ranked.truncate(n);
    Ok(ranked.into_iter().map(|s| s.id).collect())
}
