use anyhow::Context;
use sift_core::{Answer, Answerer};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::debug;

pub fn run(
    corpus: &Path,
    query: Option<&str>,
    files: Option<usize>,
    sentences: Option<usize>,
    config: Option<&Path>,
) -> anyhow::Result<()> {
    let mut config = super::resolve_config(config)?;
    if let Some(n) = files {
        config.file_matches = n;
    }
    if let Some(n) = sentences {
        config.sentence_matches = n;
    }

    let documents = sift_io::load_documents(corpus, &config.extension)
        .with_context(|| format!("failed to load corpus from {}", corpus.display()))?;
    if documents.is_empty() {
        println!(
            "No .{} documents found in {}",
            config.extension,
            corpus.display()
        );
        return Ok(());
    }

    let answerer = Answerer::new(documents, config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match query {
        Some(text) => write_answer(&mut out, &answerer.answer(text)?),
        None => prompt_loop(&answerer, std::io::stdin().lock(), &mut out),
    }
}

/// Prompt for queries until end of input, answering each against the same corpus
fn prompt_loop<R: BufRead, W: Write>(
    answerer: &Answerer,
    mut input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "Query: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        write_answer(out, &answerer.answer(text)?)?;
    }
}

fn write_answer<W: Write>(out: &mut W, answer: &Answer) -> anyhow::Result<()> {
    debug!(documents = ?answer.documents, "top documents");
    for sentence in &answer.sentences {
        writeln!(out, "{}", sentence)?;
    }
    Ok(())
}
