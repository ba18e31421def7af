//! Errors raised while reading documents and configuration

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Config(#[from] sift_core::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;
