//! TF-IDF document ranking

use crate::corpus::Corpus;
use crate::error::Result;
use crate::idf::IdfTable;
use crate::tokenizer::Query;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDocument<'c> {
    pub id: &'c str,
    pub score: f64,
}

/// Score every document and order by descending TF-IDF.
///
/// Ties keep corpus insertion order. Only query words present in a document
/// are looked up in `idf`, so a table computed from `corpus` never misses.
pub fn rank_documents<'c>(
    query: &Query,
    corpus: &'c Corpus,
    idf: &IdfTable,
) -> Result<Vec<ScoredDocument<'c>>> {
    let mut scored = Vec::with_capacity(corpus.len());

    for (id, tokens) in corpus.iter() {
        let mut term_freq: HashMap<&str, usize> = HashMap::new();
        for token in tokens {
            *term_freq.entry(token.as_str()).or_insert(0) += 1;
        }

        let mut score = 0.0;
        for word in query {
            if let Some(&count) = term_freq.get(word.as_str()) {
                score += count as f64 * idf.weight(word)?;
            }
        }
        scored.push(ScoredDocument { id, score });
    }

    // Stable: equal scores stay in insertion order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(scored)
}

/// Ids of the `n` highest-scoring documents
pub fn top_documents<'c>(
    query: &Query,
    corpus: &'c Corpus,
    idf: &IdfTable,
    n: usize,
) -> Result<Vec<&'c str>> {
    let mut ranked = rank_documents(query, corpus, idf)?;
    ranked.truncate(n);
    Ok(ranked.into_iter().map(|doc| doc.id).collect())
}
