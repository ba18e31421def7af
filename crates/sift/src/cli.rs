use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sift")]
#[command(version)]
#[command(about = "Answer questions from a folder of text documents")]
pub struct Cli {
    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer queries against a directory of documents
    Ask {
        /// Directory holding the documents
        corpus: PathBuf,

        /// Answer this query and exit (prompts on stdin if omitted)
        #[arg(short, long)]
        query: Option<String>,

        /// Number of documents to draw sentences from
        #[arg(long, value_parser = parse_count, allow_negative_numbers = true)]
        files: Option<usize>,

        /// Number of sentences to print
        #[arg(long, value_parser = parse_count, allow_negative_numbers = true)]
        sentences: Option<usize>,

        /// JSON config file (defaults to the user config directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the content words of a text, one per line
    Tokens {
        text: String,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print document IDF weights, rarest first
    Idf {
        corpus: PathBuf,

        /// Maximum number of words to print
        #[arg(long, value_parser = parse_count, allow_negative_numbers = true)]
        limit: Option<usize>,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print version information
    Version,
}

fn parse_count(value: &str) -> Result<usize, String> {
    let n: i64 = value.parse().map_err(|e| format!("{}", e))?;
    sift_core::result_count(n).map_err(|e| e.to_string())
}
