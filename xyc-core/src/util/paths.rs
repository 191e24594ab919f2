use std::path::Path;

use crate::error::{Result, XycError};

/// Final component of `path` as UTF-8, for building output file names.
pub fn file_name_of(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| XycError::Parse(format!("unusable file name: {}", path.display())))
}
