//! Error types for the shortening pass.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while planning or applying a shortening.
#[derive(Debug, Error)]
pub enum ShortenError {
    /// The max length leaves no room for the stem (or collision suffix) of a name.
    #[error("max length {max_len} is too small for {name}: at least {required} characters are needed")]
    Configuration {
        /// The original file name.
        name: String,
        /// The configured max length.
        max_len: usize,
        /// The smallest max length that would work.
        required: usize,
    },

    /// The entry disappeared between enumeration and inspection.
    #[error("{path} disappeared before it could be inspected")]
    Vanished {
        /// Path that was enumerated.
        path: PathBuf,
    },

    /// Something already exists at the target path.
    #[error("refusing to overwrite existing {path}")]
    Collision {
        /// The occupied target path.
        path: PathBuf,
    },

    /// Every candidate short name is taken.
    #[error("no free short name for {name} after {attempts} attempts")]
    CollisionsExhausted {
        /// The original file name.
        name: String,
        /// How many suffixed candidates were tried.
        attempts: u32,
    },

    /// The rename failed; the file is untouched.
    #[error("failed to rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rename succeeded but the link at the old path could not be created.
    #[error("renamed {from} to {to} but could not create the link at {from}: {source}")]
    Link {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid root or unsupported environment. Raised before any mutation.
    #[error("{message}: {path}")]
    Setup {
        /// The offending path.
        path: PathBuf,
        /// What is wrong with it.
        message: String,
    },

    /// The directory walker reported an error.
    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// Generic I/O error at a path.
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ShortenError {
    /// True when the file was renamed but its old name is missing.
    ///
    /// This state is not repaired by a re-run and needs manual intervention.
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Link { .. })
    }

    /// True for errors that mean "leave this file alone" rather than "this file failed".
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::Vanished { .. })
    }
}
