use sift_core::IdfTable;
use std::path::Path;

pub fn run(corpus: &Path, limit: Option<usize>, config: Option<&Path>) -> anyhow::Result<()> {
    let config = super::resolve_config(config)?;
    let documents = sift_io::load_documents(corpus, &config.extension)?;
    let answerer = sift_core::Answerer::new(documents, config)?;

    println!("{} documents", answerer.corpus().len());
    for line in format_table(answerer.idf(), limit) {
        println!("{}", line);
    }
    Ok(())
}

fn format_table(idf: &IdfTable, limit: Option<usize>) -> Vec<String> {
    idf.sorted()
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|(word, weight)| format!("{:>10.6}  {}", weight, word))
        .collect()
}
