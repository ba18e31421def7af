//! JSON configuration files

use crate::error::Result;
use sift_core::Config;
use std::path::Path;
use tracing::debug;

/// Read and validate a JSON config file; missing keys take defaults
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&content)?;
    config.validate()?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Like [`load_config`], but a file that does not exist yields the defaults
pub fn load_config_or_default(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    load_config(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use tempfile::TempDir;

    #[test]
    fn test_load_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"file_matches": 2, "extension": "md"}"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.file_matches, 2);
        assert_eq!(config.sentence_matches, 1);
        assert_eq!(config.extension, "md");
    }

    #[test]
    fn test_missing_file_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config_or_default(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_config(&path), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_negative_count_rejected_by_parser() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"file_matches": -1}"#).unwrap();
        assert!(matches!(load_config(&path), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"extension": ""}"#).unwrap();
        assert!(matches!(load_config(&path), Err(LoadError::Config(_))));
    }
}
