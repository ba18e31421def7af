//! Reading a directory of documents

use crate::error::{LoadError, Result};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Load every file in `dir` with the given extension, keyed by file name.
///
/// Only direct children are read. Files that are not valid UTF-8 or cannot
/// be read are skipped with a warning. Keys iterate in lexical order.
pub fn load_documents(dir: &Path, extension: &str) -> Result<BTreeMap<String, String>> {
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory(dir.to_path_buf()));
    }

    let mut documents = BTreeMap::new();
    for entry in std::fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                documents.insert(name.to_string(), content);
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable document");
            }
        }
    }

    debug!(dir = %dir.display(), documents = documents.len(), "loaded documents");
    Ok(documents)
}
