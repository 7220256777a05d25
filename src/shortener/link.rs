//! Rename a file to its short name and leave a symbolic link at the old path

use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use super::error::ShortenError;

/// Sibling of `old_path` named `new_name`
pub fn sibling_path(old_path: &Path, new_name: &str) -> PathBuf {
    old_path.with_file_name(new_name)
}

/// Renames `old_path` to its sibling `new_name`, then links `old_path` to it.
///
/// The link target is relative (just `new_name`) so the tree can be moved.
///
/// # Errors
/// - `Collision` if anything exists at the target path; nothing is changed
/// - `Rename` if the rename fails; nothing is changed
/// - `Link` if the link fails after the rename; the file only exists at the new path
pub fn rename_and_link(old_path: &Path, new_name: &str) -> Result<PathBuf, ShortenError> {
    let new_path = sibling_path(old_path, new_name);

    // rename(2) replaces an existing target without complaint
    match std::fs::symlink_metadata(&new_path) {
        Ok(_) => return Err(ShortenError::Collision { path: new_path }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(ShortenError::Io {
                path: new_path,
                source,
            })
        }
    }

    std::fs::rename(old_path, &new_path).map_err(|source| ShortenError::Rename {
        from: old_path.to_path_buf(),
        to: new_path.clone(),
        source,
    })?;
    debug!("Renamed {} to {}", old_path.display(), new_path.display());

    if let Err(source) = create_symlink(Path::new(new_name), old_path) {
        error!(
            "Renamed {} to {} but the link back could not be created, manual repair needed: {}",
            old_path.display(),
            new_path.display(),
            source
        );
        return Err(ShortenError::Link {
            from: old_path.to_path_buf(),
            to: new_path,
            source,
        });
    }
    debug!("Linked {} -> {}", old_path.display(), new_name);

    Ok(new_path)
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(not(unix))]
fn create_symlink(_target: &Path, _link: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symbolic links require a unix platform",
    ))
}
