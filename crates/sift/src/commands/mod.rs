pub mod ask;
pub mod idf;
pub mod tokens;
pub mod version;

use sift_core::Config;
use sift_io::Paths;
use std::path::Path;

/// Explicit config file if given, else the user config file if present, else defaults
pub(crate) fn resolve_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Ok(sift_io::load_config(path)?);
    }
    match Paths::new().default_config_file() {
        Some(default) => Ok(sift_io::load_config_or_default(&default)?),
        None => Ok(Config::default()),
    }
}
