//! Relevance engine: tokenization, IDF weights, and TF-IDF ranking of documents and sentences

mod answer;
mod config;
mod corpus;
mod documents;
mod error;
mod idf;
mod segment;
mod sentences;
mod stopwords;
mod tokenizer;

pub use answer::{Answer, Answerer};
pub use config::Config;
pub use corpus::Corpus;
pub use documents::{ScoredDocument, rank_documents, top_documents};
pub use error::{Error, Result, result_count};
pub use idf::{IdfTable, compute_idf};
pub use segment::split_sentences;
pub use sentences::{ScoredSentence, rank_sentences, top_sentences};
pub use stopwords::StopWords;
pub use tokenizer::{Query, Tokenizer, tokenize};
