//! Path resolution for configuration files

use std::path::PathBuf;

/// Resolves standard locations for sift files
#[derive(Debug, Clone)]
pub struct Paths {
    pub config_dir: Option<PathBuf>,
}

impl Paths {
    pub fn new() -> Self {
        Self {
            config_dir: dirs::config_dir().map(|dir| dir.join("sift")),
        }
    }

    /// `<config_dir>/sift/config.json`, if the platform has a config directory
    pub fn default_config_file(&self) -> Option<PathBuf> {
        self.config_dir.as_ref().map(|dir| dir.join("config.json"))
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_file() {
        let paths = Paths {
            config_dir: Some(PathBuf::from("/home/user/.config/sift")),
        };
        assert_eq!(
            paths.default_config_file(),
            Some(PathBuf::from("/home/user/.config/sift/config.json"))
        );
    }

    #[test]
    fn test_no_config_dir() {
        let paths = Paths { config_dir: None };
        assert!(paths.default_config_file().is_none());
    }
}
