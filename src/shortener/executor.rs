//! Sequential execution of a shortening plan

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use super::entry::FileEntry;
use super::error::ShortenError;
use super::link::{rename_and_link, sibling_path};
use super::name::shorten;
use super::planner::ShortenPlan;
use crate::core::config::ShortenerConfig;
use crate::core::stats::ShortenStatistics;

/// Result of processing one planned file
#[derive(Debug)]
pub enum Outcome {
    /// Renamed and linked
    Shortened { from: PathBuf, to: PathBuf },
    /// Dry run: would have been renamed to `to`
    Planned { from: PathBuf, to: PathBuf },
    /// Left untouched
    Skipped { path: PathBuf, error: ShortenError },
    /// Could not be shortened, or ended up renamed without its link
    Failed { path: PathBuf, error: ShortenError },
}

/// Applies shortenings one file at a time.
///
/// Keeps a listing of each directory it touches so names taken earlier in the run are
/// seen by later files in the same directory without re-reading it.
pub struct Shortener<'a> {
    config: &'a ShortenerConfig,
    dir_names: HashMap<PathBuf, HashSet<String>>,
}

impl<'a> Shortener<'a> {
    pub fn new(config: &'a ShortenerConfig) -> Self {
        Self {
            config,
            dir_names: HashMap::new(),
        }
    }

    /// Shortens one file. Never panics on I/O trouble; every problem becomes an outcome.
    pub fn process(&mut self, entry: &FileEntry) -> Outcome {
        match self.try_process(entry) {
            Ok(outcome) => outcome,
            Err(error) if error.is_skip() => {
                warn!("Skipped {}: {}", entry.path.display(), error);
                Outcome::Skipped {
                    path: entry.path.clone(),
                    error,
                }
            }
            Err(error) => {
                // Partial states were already reported where the link failed
                if !error.is_partial() {
                    error!("Failed to shorten {}: {}", entry.path.display(), error);
                }
                Outcome::Failed {
                    path: entry.path.clone(),
                    error,
                }
            }
        }
    }

    fn try_process(&mut self, entry: &FileEntry) -> Result<Outcome, ShortenError> {
        let original_name = entry.base_name().ok_or_else(|| ShortenError::Io {
            path: entry.path.clone(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "file name is not valid UTF-8",
            ),
        })?;

        // The tree may have changed since it was planned
        let current = FileEntry::from_path(&entry.path)?;
        if current.is_symlink || !current.is_file {
            return Err(ShortenError::Vanished {
                path: entry.path.clone(),
            });
        }

        let max_len = self.config.max_filename_length;
        let dry_run = self.config.dry_run;
        let names = self.names_in(entry.parent())?;
        let new_name = shorten(original_name, max_len, names)?;

        if dry_run {
            let to = sibling_path(&entry.path, &new_name);
            info!("Would rename {} to {}", entry.path.display(), to.display());
            names.insert(new_name);
            return Ok(Outcome::Planned {
                from: entry.path.clone(),
                to,
            });
        }

        let result = rename_and_link(&entry.path, &new_name);
        // After a failed link the file still lives under the new name
        if matches!(result, Ok(_) | Err(ShortenError::Link { .. })) {
            names.insert(new_name);
        }
        let to = result?;
        info!("Renamed {} to {}", entry.path.display(), to.display());
        info!(
            "Created symbolic link from {} to {}",
            entry.path.display(),
            to.display()
        );

        Ok(Outcome::Shortened {
            from: entry.path.clone(),
            to,
        })
    }

    fn names_in(&mut self, dir: &Path) -> Result<&mut HashSet<String>, ShortenError> {
        match self.dir_names.entry(dir.to_path_buf()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(list_names(dir)?)),
        }
    }
}

/// Names of every entry in `dir`, as UTF-8 where possible
fn list_names(dir: &Path) -> Result<HashSet<String>, ShortenError> {
    let read_dir = std::fs::read_dir(dir).map_err(|source| ShortenError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = HashSet::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| ShortenError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        names.insert(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// Processes every planned file in order and records the outcomes.
///
/// One file's failure never stops the others.
pub fn execute_plan(
    plan: &ShortenPlan,
    config: &ShortenerConfig,
    statistics: &mut ShortenStatistics,
) {
    info!("Started processing {} files", plan.candidates.len());

    let mut shortener = Shortener::new(config);
    for entry in &plan.candidates {
        let outcome = shortener.process(entry);
        statistics.update(&outcome);
    }

    info!("Processing completed");
}
