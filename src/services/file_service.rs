use std::fs;
use std::io;
use std::path::Path;

use crate::error::AppError;
use crate::safety::{resolve_target, validate_deletable, validate_path};

/// Deletes a file, or a directory with everything beneath it.
///
/// Directories are removed depth-first, children before parents. The first
/// failure stops the walk and is returned; whatever was already removed
/// stays removed. Returns the number of filesystem entries deleted.
pub fn delete_path(path: &str, allow_protected: bool) -> Result<usize, AppError> {
    validate_path(path)?;

    // symlink_metadata so a dangling link still counts as existing.
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(AppError::InvalidArgument(format!(
                "path does not exist: {path}"
            )));
        }
        Err(e) => return Err(delete_error(e, path)),
    };

    // Guard both the text as given and where it actually lands.
    validate_deletable(path, allow_protected)?;
    let target = resolve_target(Path::new(path)).map_err(|e| delete_error(e, path))?;
    validate_deletable(&target.to_string_lossy(), allow_protected)?;

    if !metadata.is_dir() {
        fs::remove_file(&target).map_err(|e| delete_error(e, path))?;
        return Ok(1);
    }

    remove_tree(&target)
}

fn remove_tree(root: &Path) -> Result<usize, AppError> {
    let mut removed = 0usize;
    let walker = walkdir::WalkDir::new(root)
        .follow_links(false)
        .contents_first(true);

    for entry in walker {
        let entry = entry.map_err(|e| {
            let at = e
                .path()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_else(|| root.to_string_lossy().to_string());
            match e.into_io_error() {
                Some(io_err) => delete_error(io_err, &at),
                None => AppError::Unknown(format!("filesystem loop under {at}")),
            }
        })?;

        let entry_path = entry.path();
        let result = if entry.file_type().is_dir() {
            fs::remove_dir(entry_path)
        } else {
            fs::remove_file(entry_path)
        };
        result.map_err(|e| delete_error(e, &entry_path.to_string_lossy()))?;
        removed += 1;
    }

    Ok(removed)
}

fn delete_error(err: io::Error, path: &str) -> AppError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => AppError::AccessDenied(path.to_string()),
        _ => AppError::Unknown(format!("{path}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_delete_file() {
        let base = TempDir::new().unwrap();
        let file = base.path().join("doomed.txt");
        File::create(&file).unwrap().write_all(b"bye").unwrap();

        let removed = delete_path(&file.to_string_lossy(), false).unwrap();

        assert_eq!(removed, 1);
        assert!(!file.exists());
        assert!(base.path().exists());
    }

    #[test]
    fn test_delete_directory_tree() {
        let base = TempDir::new().unwrap();
        let root = base.path().join("tree");
        fs::create_dir_all(root.join("a/b/c")).unwrap();
        fs::write(root.join("top.txt"), "1").unwrap();
        fs::write(root.join("a/mid.txt"), "2").unwrap();
        fs::write(root.join("a/b/c/deep.txt"), "3").unwrap();

        let removed = delete_path(&root.to_string_lossy(), false).unwrap();

        // tree, a, b, c and three files
        assert_eq!(removed, 7);
        assert!(!root.exists());
        assert!(base.path().exists());
    }

    #[test]
    fn test_delete_empty_directory() {
        let base = TempDir::new().unwrap();
        let empty = base.path().join("empty");
        fs::create_dir(&empty).unwrap();

        assert_eq!(delete_path(&empty.to_string_lossy(), false).unwrap(), 1);
        assert!(!empty.exists());
    }

    #[test]
    fn test_delete_missing_path_is_invalid() {
        let base = TempDir::new().unwrap();
        let missing = base.path().join("ghost");
        let err = delete_path(&missing.to_string_lossy(), false).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[test]
    fn test_delete_empty_path_is_invalid() {
        assert!(matches!(
            delete_path("", false),
            Err(AppError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_delete_filesystem_root_refused() {
        let err = delete_path("/", true).unwrap_err();
        assert!(matches!(err, AppError::AccessDenied(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_delete_parent_dir_escapes_refused() {
        for attempt in ["/tmp/..", "/tmp/../etc", "//usr"] {
            let err = delete_path(attempt, false).unwrap_err();
            assert!(matches!(err, AppError::AccessDenied(_)), "{attempt}: {err:?}");
        }
        assert!(matches!(
            delete_path("/tmp/..", true),
            Err(AppError::AccessDenied(_))
        ));
        assert!(Path::new("/etc").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_delete_root_through_symlinked_parent_refused() {
        let base = TempDir::new().unwrap();
        std::os::unix::fs::symlink("/", base.path().join("slash")).unwrap();
        let sneaky = base.path().join("slash").join("etc");

        let err = delete_path(&sneaky.to_string_lossy(), false).unwrap_err();

        assert!(matches!(err, AppError::AccessDenied(_)));
        assert!(Path::new("/etc").exists());
    }

    #[test]
    fn test_delete_through_parent_dir_inside_scratch() {
        let base = TempDir::new().unwrap();
        fs::create_dir(base.path().join("sub")).unwrap();
        let file = base.path().join("victim.txt");
        fs::write(&file, "x").unwrap();

        let winding = base.path().join("sub").join("..").join("victim.txt");
        assert_eq!(delete_path(&winding.to_string_lossy(), false).unwrap(), 1);
        assert!(!file.exists());
        assert!(base.path().join("sub").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_delete_does_not_follow_symlinks() {
        let base = TempDir::new().unwrap();
        let keep = base.path().join("keep");
        fs::create_dir(&keep).unwrap();
        fs::write(keep.join("precious.txt"), "data").unwrap();

        let doomed = base.path().join("doomed");
        fs::create_dir(&doomed).unwrap();
        std::os::unix::fs::symlink(&keep, doomed.join("link")).unwrap();

        delete_path(&doomed.to_string_lossy(), false).unwrap();

        assert!(!doomed.exists());
        assert!(keep.join("precious.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_delete_dangling_symlink() {
        let base = TempDir::new().unwrap();
        let link = base.path().join("dangling");
        std::os::unix::fs::symlink(base.path().join("nowhere"), &link).unwrap();

        assert_eq!(delete_path(&link.to_string_lossy(), false).unwrap(), 1);
        assert!(fs::symlink_metadata(&link).is_err());
    }

    #[test]
    fn test_delete_error_mapping() {
        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "no");
        assert!(matches!(
            delete_error(denied, "/x"),
            AppError::AccessDenied(p) if p == "/x"
        ));

        let busy = io::Error::other("device busy");
        match delete_error(busy, "/y") {
            AppError::Unknown(msg) => assert!(msg.contains("device busy")),
            e => panic!("unexpected {e:?}"),
        }
    }
}
