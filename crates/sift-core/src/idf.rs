//! Inverse document frequency over a corpus of tokenized units

use crate::corpus::Corpus;
use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Word rarity weights, `ln(units / units_containing_word)`.
///
/// Defined only for words that occur in the corpus the table was computed over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    weights: HashMap<String, f64>,
}

impl IdfTable {
    pub fn get(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    /// Weight for a word the caller has already seen in the scored corpus.
    ///
    /// A miss means the table and corpus were built from different data.
    pub fn weight(&self, word: &str) -> Result<f64> {
        self.get(word).ok_or_else(|| Error::MissingIdf {
            word: word.to_string(),
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.weights.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(w, &idf)| (w.as_str(), idf))
    }

    /// Entries ordered by descending weight, then word
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for IdfTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().map(|(w, idf)| (w.into(), idf)).collect(),
        }
    }
}

/// Compute IDF weights for every word in `corpus`.
///
/// Each unit contributes at most once per word, so document frequency is
/// counted from per-unit presence sets in a single pass over the tokens.
pub fn compute_idf(corpus: &Corpus) -> IdfTable {
    let unit_count = corpus.len() as f64;

    let mut doc_freq: HashMap<&str, usize> = HashMap::new();
    for (_, tokens) in corpus.iter() {
        let present: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for word in present {
            *doc_freq.entry(word).or_insert(0) += 1;
        }
    }

    let table: IdfTable = doc_freq
        .into_iter()
        .map(|(word, df)| (word, (unit_count / df as f64).ln()))
        .collect();

    debug!(
        units = corpus.len(),
        tokens = corpus.token_count(),
        vocabulary = table.len(),
        "computed idf table"
    );
    table
}
