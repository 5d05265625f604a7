use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Immediate children of `dir`. The one hard failure of a cleanup pass is the
/// directory itself being unlistable; unreadable individual entries are
/// skipped.
pub fn list_entries(dir: &Path) -> io::Result<Vec<PathBuf>> {
    Ok(fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .collect())
}

/// Removes a single entry: directories recursively, files and symlinks
/// directly. `symlink_metadata` keeps a link to a directory from being
/// followed into.
pub fn remove_entry(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Best-effort size of an entry, in bytes. Unreadable entries count as zero.
#[must_use]
pub fn entry_size(path: &Path) -> u64 {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_dir() => WalkDir::new(path)
            .follow_links(false)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| entry.metadata().ok())
            .map(|metadata| metadata.len())
            .sum(),
        Ok(metadata) => metadata.len(),
        Err(_) => 0,
    }
}
