use std::path::Path;

use tracing::debug;

use gattai_dict::Dictionary;

use crate::errors::SourceError;

/// Load a generated dictionary back from its JSON map form.
///
/// Entries must already be binary; a value with any other arity is a
/// format error naming the file.
pub fn load_dictionary(path: &Path) -> Result<Dictionary, SourceError> {
    let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dict: Dictionary =
        serde_json::from_str(&text).map_err(|source| SourceError::DictionaryFormat {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), entries = dict.len(), "loaded dictionary");
    Ok(dict)
}
