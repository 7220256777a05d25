//! Directory walking and root validation

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::shortener::{FileEntry, ShortenError};

/// Checks that `root` exists and is a directory, returning its canonical form.
///
/// Runs before anything is touched, so a bad argument never leads to a partial run.
pub fn validate_root(root: impl AsRef<Path>) -> Result<PathBuf, ShortenError> {
    let root = root.as_ref();

    let metadata = std::fs::metadata(root).map_err(|e| ShortenError::Setup {
        path: root.to_path_buf(),
        message: format!("cannot access target directory ({e})"),
    })?;
    if !metadata.is_dir() {
        return Err(ShortenError::Setup {
            path: root.to_path_buf(),
            message: "target is not a directory".to_string(),
        });
    }

    std::fs::read_dir(root).map_err(|e| ShortenError::Setup {
        path: root.to_path_buf(),
        message: format!("cannot read target directory ({e})"),
    })?;

    root.canonicalize().map_err(|e| ShortenError::Setup {
        path: root.to_path_buf(),
        message: format!("cannot resolve target directory ({e})"),
    })
}

/// Lazily walks every node under `root` (the root itself excluded).
///
/// Symbolic links are reported but never followed, and no ignore files or hidden-file
/// rules apply: every node is visited. Siblings come in file-name order so runs over the
/// same tree process files in the same order.
pub fn walk(root: impl AsRef<Path>) -> impl Iterator<Item = Result<FileEntry, ShortenError>> {
    WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
        .filter(|result| result.as_ref().map_or(true, |entry| entry.depth() > 0))
        .map(|result| match result {
            Ok(entry) => FileEntry::from_path(entry.path()),
            Err(e) => Err(ShortenError::Walk(e)),
        })
}
