//! Bookmark export selection.
//!
//! Picks the most recently modified `.html` file in the bookmarks directory.
//! An absent or empty directory is a normal "nothing to import" state.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use crate::{debug, log};

/// Accepted export extension (compared case-insensitively).
const EXPORT_EXTENSION: &str = "html";

/// Get the modification time of a file
///
/// Returns `None` if the file doesn't exist or mtime cannot be read
pub fn get_mtime(path: &Path) -> Option<SystemTime> {
    path.metadata().and_then(|m| m.modified()).ok()
}

fn is_export_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(EXPORT_EXTENSION))
}

/// Find the newest bookmark export in `dir`.
///
/// Creates `dir` when it does not exist and returns `Ok(None)`; also
/// returns `Ok(None)` when no export is present. Ties on mtime keep the
/// first file in directory listing order.
pub fn latest_bookmark_file(dir: &Path) -> Result<Option<PathBuf>> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create bookmarks directory '{}'", dir.display()))?;
        log!("source"; "created empty bookmarks directory {}", dir.display());
        return Ok(None);
    }

    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read bookmarks directory '{}'", dir.display()))?;

    let mut latest: Option<(PathBuf, SystemTime)> = None;
    for entry in entries.flatten() {
        let path = entry.path();
        if !is_export_file(&path) {
            continue;
        }
        let mtime = get_mtime(&path).unwrap_or(SystemTime::UNIX_EPOCH);
        debug!("source"; "candidate {}", path.display());
        if latest.as_ref().is_none_or(|(_, best)| mtime > *best) {
            latest = Some((path, mtime));
        }
    }

    match latest {
        Some((path, _)) => {
            log!("source"; "using {}", path.display());
            Ok(Some(path))
        }
        None => {
            log!("source"; "no .html bookmark export in {}", dir.display());
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    fn touch(path: &Path, secs: u64) {
        fs::write(path, "<DL><p></DL><p>").unwrap();
        let file = fs::File::options().write(true).open(path).unwrap();
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
            .unwrap();
    }

    #[test]
    fn test_missing_dir_is_created() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("bookmarks");

        assert_eq!(latest_bookmark_file(&dir).unwrap(), None);
        assert!(dir.is_dir());
    }

    #[test]
    fn test_no_html_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.txt"), "x").unwrap();
        fs::create_dir(temp.path().join("nested.html")).unwrap();

        assert_eq!(latest_bookmark_file(temp.path()).unwrap(), None);
    }

    #[test]
    fn test_picks_newest_by_mtime() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("old.html"), 1_000);
        touch(&temp.path().join("new.HTML"), 3_000);
        touch(&temp.path().join("mid.html"), 2_000);
        touch(&temp.path().join("newest.txt"), 9_000);

        let latest = latest_bookmark_file(temp.path()).unwrap().unwrap();
        assert_eq!(latest.file_name().unwrap(), "new.HTML");
    }
}
