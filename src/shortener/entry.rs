//! Snapshot of one filesystem node seen during the walk

use chrono::{DateTime, Utc};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::error::ShortenError;
use super::name::name_length;

/// One node encountered during the walk. Lives only while that node is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub file_name: OsString,
    pub is_symlink: bool,
    pub is_file: bool,
    pub modified: Option<DateTime<Utc>>,
}

impl FileEntry {
    /// Inspects `path` without following symbolic links.
    ///
    /// A node that no longer exists yields `ShortenError::Vanished`.
    pub fn from_path(path: &Path) -> Result<Self, ShortenError> {
        let metadata = std::fs::symlink_metadata(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ShortenError::Vanished {
                    path: path.to_path_buf(),
                }
            } else {
                ShortenError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let file_type = metadata.file_type();
        Ok(Self {
            path: path.to_path_buf(),
            file_name: path.file_name().map(OsString::from).unwrap_or_default(),
            is_symlink: file_type.is_symlink(),
            is_file: file_type.is_file(),
            modified: metadata.modified().ok().map(DateTime::<Utc>::from),
        })
    }

    /// File name as UTF-8, if it is valid UTF-8
    pub fn base_name(&self) -> Option<&str> {
        self.file_name.to_str()
    }

    /// Name length in characters
    pub fn name_length(&self) -> Option<usize> {
        self.base_name().map(name_length)
    }

    /// Directory containing this entry
    pub fn parent(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}
