use std::fs;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::file_entry::FileEntry;

/// Source of raw directory children for the listing pipeline.
pub trait DirectoryEnumerator: Send + Sync {
    /// Returns every child of `directory` in enumeration order. Metadata is
    /// best-effort per entry; only failing to open the directory is an error.
    fn enumerate(&self, directory: &str) -> Result<Vec<FileEntry>, AppError>;
}

/// Enumerates the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalEnumerator;

impl DirectoryEnumerator for LocalEnumerator {
    fn enumerate(&self, directory: &str) -> Result<Vec<FileEntry>, AppError> {
        let dir_path = Path::new(directory);
        let reader = fs::read_dir(dir_path).map_err(|e| AppError::from_io(e, directory))?;

        let mut entries = Vec::new();
        for entry in reader {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(directory, error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let entry_path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            let path = entry_path.to_string_lossy().to_string();

            // Follows symlinks, so a link to a directory lists as a directory.
            // Looked up on the raw OS path; `path` may be lossy.
            let file_entry = match fs::metadata(&entry_path) {
                Ok(metadata) => {
                    let modified_at = metadata.modified().ok().map(epoch_seconds);
                    if metadata.is_dir() {
                        FileEntry::directory(&name, &path, modified_at)
                    } else {
                        let size = metadata.is_file().then(|| metadata.len());
                        FileEntry::file(&name, &path, size, modified_at)
                    }
                }
                Err(e) => {
                    tracing::debug!(path, error = %e, "metadata unavailable");
                    let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
                    if is_dir {
                        FileEntry::directory(&name, &path, None)
                    } else {
                        FileEntry::file(&name, &path, None, None)
                    }
                }
            };
            entries.push(file_entry);
        }

        Ok(entries)
    }
}

fn epoch_seconds(time: SystemTime) -> f64 {
    let utc = DateTime::<Utc>::from(time);
    utc.timestamp_micros() as f64 / 1_000_000.0
}
