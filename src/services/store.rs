use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::MatchDocument;

/// Errors that can occur when reading or writing the record files
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Load the raw record array from a JSON file.
///
/// Returns loose JSON values rather than typed records: the caller decodes
/// them one at a time so that a single malformed entry costs one record
/// and a warning, not the whole batch.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<serde_json::Value>, StoreError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write the batch's match documents to a JSON file, replacing any
/// previous result set. Parent directories are created as needed.
pub fn write_matches<P: AsRef<Path>>(
    path: P,
    documents: &[MatchDocument],
) -> Result<(), StoreError> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let contents = serde_json::to_string_pretty(documents)?;
    fs::write(path, contents)?;
    Ok(())
}
