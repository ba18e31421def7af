mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Directives from `RUST_LOG` when set; otherwise `warn`, or `debug` with `--verbose`
fn log_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(env.unwrap_or_default())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(cli.verbose, env.as_deref()))
        .init();

    match cli.command {
        Commands::Ask {
            corpus,
            query,
            files,
            sentences,
            config,
        } => commands::ask::run(
            &corpus,
            query.as_deref(),
            files,
            sentences,
            config.as_deref(),
        ),
        Commands::Tokens { text, config } => commands::tokens::run(&text, config.as_deref()),
        Commands::Idf {
            corpus,
            limit,
            config,
        } => commands::idf::run(&corpus, limit, config.as_deref()),
        Commands::Version => commands::version::run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults() {
        assert_eq!(
            log_filter(false, None).max_level_hint(),
            Some(LevelFilter::WARN)
        );
        assert_eq!(
            log_filter(true, None).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(false, Some("")).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }

    #[test]
    fn test_log_filter_honours_environment() {
        assert_eq!(
            log_filter(false, Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(true, Some("error")).max_level_hint(),
            Some(LevelFilter::ERROR)
        );
    }
}
