//! Text normalization into content-word token sequences

use crate::stopwords::StopWords;
use std::collections::BTreeSet;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// A normalized query: distinct words, iterated in lexical order so that
/// score summation order is fixed.
pub type Query = BTreeSet<String>;

/// Tokenize `text` into lower-cased content words, in order.
///
/// Words are split on Unicode word boundaries (UAX #29), so contractions stay
/// whole (`don't`) and hyphenated words split (`well-known` -> `well`, `known`).
/// Segments made up only of punctuation or whitespace are dropped, as are stop
/// words. Symbols such as currency signs and emoji are kept as tokens.
pub fn tokenize(text: &str, stop_words: &StopWords) -> Vec<String> {
    // Typographic apostrophes fold to ASCII so contractions match the stop list
    let lowered = text.to_lowercase().replace('\u{2019}', "'");

    lowered
        .split_word_bounds()
        .filter(|word| !word.chars().all(|c| c.is_whitespace() || is_punctuation(c)))
        .filter(|word| !stop_words.contains(word))
        .map(str::to_string)
        .collect()
}

/// ASCII punctuation plus the common Latin-1, General Punctuation and CJK marks.
///
/// Invisible separators in the General Punctuation block (U+2000..U+200F) count too.
fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(c,
            '\u{00A1}' | '\u{00A7}' | '\u{00AB}' | '\u{00B6}' | '\u{00B7}' | '\u{00BB}' | '\u{00BF}' |
            '\u{2000}'..='\u{2027}' |  // spaces, dashes, quotes, bullets, ellipsis
            '\u{2030}'..='\u{205E}' |  // per-mille, primes, guillemets, misc marks
            '\u{3001}'..='\u{3003}' |  // CJK comma and full stop
            '\u{3008}'..='\u{3011}' |  // CJK brackets
            '\u{FEFF}'
        )
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: Arc<StopWords>,
}

impl Tokenizer {
    pub fn new(stop_words: Arc<StopWords>) -> Self {
        Self { stop_words }
    }

    pub fn english() -> Self {
        Self::new(Arc::new(StopWords::english()))
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize(text, &self.stop_words)
    }

    /// Tokenize user input and collapse it into a query set
    pub fn query(&self, text: &str) -> Query {
        self.tokenize(text).into_iter().collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::english()
    }
}
