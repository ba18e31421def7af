use sift_core::Tokenizer;
use std::path::Path;
use std::sync::Arc;

pub fn run(text: &str, config: Option<&Path>) -> anyhow::Result<()> {
    let config = super::resolve_config(config)?;
    let tokenizer = Tokenizer::new(Arc::new(config.stop_words()));
    for token in tokenizer.tokenize(text) {
        println!("{}", token);
    }
    Ok(())
}
