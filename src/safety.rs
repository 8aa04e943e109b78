use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// System directories that deletes stay out of, written as match keys
/// (see [`match_key`]). Drive-letter keys compare case-insensitively.
const GUARDED_DIRS: &[&str] = &[
    "/Applications",
    "/Library",
    "/System",
    "/bin",
    "/boot",
    "/etc",
    "/sbin",
    "/usr",
    "c:/windows",
    "c:/program files",
    "c:/program files (x86)",
];

pub fn validate_path(path: &str) -> Result<(), AppError> {
    if path.trim().is_empty() {
        return Err(AppError::InvalidArgument("path is empty".to_string()));
    }
    if path.contains('\0') {
        return Err(AppError::InvalidArgument(
            "path contains a NUL byte".to_string(),
        ));
    }
    Ok(())
}

/// Lexically normalised form used for guard comparisons: `/` separators,
/// no empty or `.` segments, `..` folded into its parent, verbatim `\\?\`
/// prefixes dropped, and a drive letter lower-cased to `c:/...`.
fn match_key(path: &str) -> String {
    let unified = path.trim().replace('\\', "/");
    let unified = unified.strip_prefix("//?/").unwrap_or(&unified);

    let mut segments = unified.split('/').peekable();
    let drive = match segments.peek() {
        Some(first) if is_drive(first) => {
            let drive = first.to_ascii_lowercase();
            segments.next();
            Some(drive)
        }
        _ => None,
    };
    let absolute = drive.is_some() || unified.starts_with('/');

    let mut kept: Vec<&str> = Vec::new();
    for segment in segments {
        match segment {
            "" | "." => {}
            ".." => {
                if kept.pop().is_none() && !absolute {
                    kept.push("..");
                }
            }
            other => kept.push(other),
        }
    }

    let rest = kept.join("/");
    match drive {
        Some(drive) => format!("{drive}/{}", rest.to_ascii_lowercase()),
        None if absolute => format!("/{rest}"),
        None => rest,
    }
}

fn is_drive(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic()
}

/// `/`, `C:\`, `/tmp/..` and the like.
pub fn is_filesystem_root(path: &str) -> bool {
    let key = match_key(path);
    key == "/" || key.strip_suffix('/').is_some_and(is_drive)
}

pub fn is_protected_path(path: &str) -> bool {
    if is_filesystem_root(path) {
        return true;
    }
    let key = match_key(path);
    GUARDED_DIRS.iter().any(|dir| {
        key == *dir
            || key
                .strip_prefix(dir)
                .is_some_and(|below| below.starts_with('/'))
    })
}

/// Resolves `path` against the real filesystem without following a final
/// symlink: the parent is canonicalised and the last component re-attached.
/// Paths with no final name (`/`, `/tmp/..`) are canonicalised whole.
pub fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            Ok(fs::canonicalize(parent)?.join(name))
        }
        _ => fs::canonicalize(path),
    }
}

/// Filesystem roots are refused even when `allow_protected` is set.
pub fn validate_deletable(path: &str, allow_protected: bool) -> Result<(), AppError> {
    if is_filesystem_root(path) {
        return Err(AppError::AccessDenied(format!(
            "refusing to delete filesystem root: {path}"
        )));
    }
    if !allow_protected && is_protected_path(path) {
        return Err(AppError::AccessDenied(format!(
            "operation on protected path not allowed: {path}"
        )));
    }
    Ok(())
}
