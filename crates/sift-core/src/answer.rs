//! Per-query pipeline: rank documents, then extract the best sentences

use crate::config::Config;
use crate::corpus::Corpus;
use crate::documents::top_documents;
use crate::error::Result;
use crate::idf::{IdfTable, compute_idf};
use crate::segment::split_sentences;
use crate::sentences::top_sentences;
use crate::tokenizer::Tokenizer;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Result of answering one query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answer {
    /// Top-ranked document ids, best first
    pub documents: Vec<String>,
    /// Best sentences drawn from those documents, best first
    pub sentences: Vec<String>,
}

/// Answers free-text queries against a fixed set of documents.
///
/// The document corpus and its IDF table are built once; every call to
/// [`Answerer::answer`] builds a fresh sentence corpus from the top documents.
#[derive(Debug, Clone)]
pub struct Answerer {
    config: Config,
    tokenizer: Tokenizer,
    texts: HashMap<String, String>,
    corpus: Corpus,
    idf: IdfTable,
}

impl Answerer {
    /// Tokenize `documents` (id, raw text) and compute document IDF.
    ///
    /// Insertion order of `documents` is the tie-break order for ranking.
    pub fn new<I>(documents: I, config: Config) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        config.validate()?;
        let tokenizer = Tokenizer::new(Arc::new(config.stop_words()));

        let mut texts = HashMap::new();
        let mut corpus = Corpus::new();
        for (id, text) in documents {
            corpus.insert(id.clone(), tokenizer.tokenize(&text));
            texts.insert(id, text);
        }
        let idf = compute_idf(&corpus);

        debug!(
            documents = corpus.len(),
            vocabulary = idf.len(),
            "document corpus ready"
        );

        Ok(Self {
            config,
            tokenizer,
            texts,
            corpus,
            idf,
        })
    }

    pub fn answer(&self, query_text: &str) -> Result<Answer> {
        let query = self.tokenizer.query(query_text);
        debug!(terms = query.len(), "answering query");

        let documents = top_documents(&query, &self.corpus, &self.idf, self.config.file_matches)?;
        let sentences = self.sentence_corpus(&documents);
        let sentence_idf = compute_idf(&sentences);
        let matches = top_sentences(
            &query,
            &sentences,
            &sentence_idf,
            self.config.sentence_matches,
        )?;

        Ok(Answer {
            documents: documents.into_iter().map(str::to_string).collect(),
            sentences: matches.into_iter().map(str::to_string).collect(),
        })
    }

    /// Tokenized sentences of `documents`, in rank then document order.
    ///
    /// Sentences with no content words are left out.
    fn sentence_corpus(&self, documents: &[&str]) -> Corpus {
        let mut sentences = Corpus::new();
        for id in documents {
            let Some(text) = self.texts.get(*id) else {
                continue;
            };
            for sentence in split_sentences(text) {
                let tokens = self.tokenizer.tokenize(sentence);
                if !tokens.is_empty() {
                    sentences.insert(sentence, tokens);
                }
            }
        }
        debug!(
            documents = documents.len(),
            sentences = sentences.len(),
            "sentence corpus built"
        );
        sentences
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn idf(&self) -> &IdfTable {
        &self.idf
    }
}
