//! Directory listing for the two-level input layout: a base directory of
//! run subdirectories, each holding a flat set of data files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Immediate subdirectories of `root`, dot-named entries skipped, sorted
/// by name.
pub fn subdirectories(root: &Path) -> Result<Vec<PathBuf>> {
    entries(root, |e| e.file_type().is_dir())
}

/// Plain files directly inside `dir`, dot-named entries skipped, sorted
/// by name.
pub fn data_files(dir: &Path) -> Result<Vec<PathBuf>> {
    entries(dir, |e| e.file_type().is_file())
}

fn entries(root: &Path, keep: impl Fn(&walkdir::DirEntry) -> bool) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let entry = entry.map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        if is_hidden(&entry) || !keep(&entry) {
            continue;
        }
        found.push(entry.into_path());
    }
    found.sort();
    Ok(found)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
