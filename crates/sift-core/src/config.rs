//! Query answering configuration

use crate::error::{Error, Result};
use crate::stopwords::StopWords;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documents kept per query for sentence extraction
    pub file_matches: usize,

    /// Sentences returned per query
    pub sentence_matches: usize,

    /// Extension of document files to load, without the dot
    pub extension: String,

    /// Words stopped in addition to the English list
    pub extra_stop_words: Vec<String>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            file_matches: 1,
            sentence_matches: 1,
            extension: "txt".to_string(),
            extra_stop_words: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            return Err(Error::InvalidConfig("extension must not be empty".into()));
        }
        if self.extension.contains(['.', '/', '\\']) {
            return Err(Error::InvalidConfig(format!(
                "extension `{}` must be a bare suffix like `txt`",
                self.extension
            )));
        }
        Ok(())
    }

    pub fn stop_words(&self) -> StopWords {
        StopWords::english().with_extra(&self.extra_stop_words)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
