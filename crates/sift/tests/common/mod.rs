use sift_core::{Corpus, Tokenizer};
use std::path::Path;
use tempfile::TempDir;

pub fn write_corpus(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        std::fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

pub fn sample_corpus_dir() -> TempDir {
    write_corpus(&[
        (
            "python.txt",
            "Python is a high-level, general-purpose programming language.\n\
             Its design philosophy emphasizes code readability. \
             Python was conceived in the late 1980s by Guido van Rossum.\n",
        ),
        (
            "machine_learning.txt",
            "Machine learning is a field of study in artificial intelligence. \
             Neural networks are a family of models used in machine learning.\n\
             Supervised learning algorithms build a model from labeled training data.\n",
        ),
        (
            "probability.txt",
            "Probability is the branch of mathematics concerning events and numerical \
             descriptions of how likely they are to occur.\n\
             Bayes' theorem describes the probability of an event based on prior knowledge.\n",
        ),
        ("notes.md", "Python Python Python machine learning probability"),
    ])
}

pub fn tokenized(units: &[(&str, &str)]) -> Corpus {
    let tokenizer = Tokenizer::english();
    units
        .iter()
        .map(|(id, text)| (*id, tokenizer.tokenize(text)))
        .collect()
}

pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .flatten()
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
