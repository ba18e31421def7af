//! Insertion-ordered collection of tokenized units

use std::collections::HashMap;

/// Mapping from unit id (file name or sentence text) to its token sequence.
///
/// Ids are unique. Iteration follows first-insertion order; re-inserting an
/// id replaces its tokens without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    entries: Vec<(String, Vec<String>)>,
    positions: HashMap<String, usize>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a unit, returning the tokens it replaced if the id already existed
    pub fn insert(&mut self, id: impl Into<String>, tokens: Vec<String>) -> Option<Vec<String>> {
        let id = id.into();
        if let Some(&pos) = self.positions.get(&id) {
            return Some(std::mem::replace(&mut self.entries[pos].1, tokens));
        }
        self.positions.insert(id.clone(), self.entries.len());
        self.entries.push((id, tokens));
        None
    }

    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.positions
            .get(id)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(id, tokens)| (id.as_str(), tokens.as_slice()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Total number of tokens across all units
    pub fn token_count(&self) -> usize {
        self.entries.iter().map(|(_, tokens)| tokens.len()).sum()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<String>)> for Corpus {
    fn from_iter<I: IntoIterator<Item = (S, Vec<String>)>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for (id, tokens) in iter {
            corpus.insert(id, tokens);
        }
        corpus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_preserves_insertion_order() {
        let corpus: Corpus = vec![
            ("zeta", toks(&["z"])),
            ("alpha", toks(&["a"])),
            ("mid", toks(&["m"])),
        ]
        .into_iter()
        .collect();

        let ids: Vec<_> = corpus.ids().collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut corpus = Corpus::new();
        corpus.insert("a", toks(&["one"]));
        corpus.insert("b", toks(&["two"]));
        let previous = corpus.insert("a", toks(&["three"]));

        assert_eq!(previous, Some(toks(&["one"])));
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(corpus.get("a"), Some(toks(&["three"]).as_slice()));
    }

    #[test]
    fn test_lookup_and_counts() {
        let corpus: Corpus = vec![("a", toks(&["x", "y"])), ("b", toks(&[]))]
            .into_iter()
            .collect();
        assert!(corpus.contains("b"));
        assert!(!corpus.contains("c"));
        assert_eq!(corpus.get("c"), None);
        assert_eq!(corpus.token_count(), 2);
    }
}
