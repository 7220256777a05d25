//! Read-only planning pass: walk the tree and collect the files to shorten

use chrono::{DateTime, Utc};
use indicatif::ProgressBar;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

use super::eligibility::{check_eligibility, Eligibility, SkipReason};
use super::entry::FileEntry;
use super::name::is_shortened_form_of;
use crate::core::config::{ShortenerConfig, SCANNING_MESSAGE};
use crate::core::discovery::walk;

/// Files selected for shortening plus what the walk saw along the way
#[derive(Debug, Default)]
pub struct ShortenPlan {
    pub root: PathBuf,
    /// Eligible files in walk order
    pub candidates: Vec<FileEntry>,
    /// Number of nodes walked
    pub scanned: usize,
    /// Long-named files left alone for a notable reason
    pub skipped: Vec<(PathBuf, SkipReason)>,
    /// Nodes that vanished or could not be read during the walk
    pub walk_errors: Vec<String>,
}

impl ShortenPlan {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Walks `root` and selects every eligible file.
///
/// Nothing is modified. Errors on individual nodes are logged and recorded; the walk
/// continues. Log lines are written with the spinner suspended.
///
/// A long file that is the link target of a long-named sibling it looks shortened from
/// was produced by an earlier run with a different max length. Shortening it again
/// would break the existing link chain, so it is skipped as `PriorShortening`.
pub fn plan_shortening(
    root: &Path,
    config: &ShortenerConfig,
    now: DateTime<Utc>,
    progress: &ProgressBar,
) -> ShortenPlan {
    let mut plan = ShortenPlan {
        root: root.to_path_buf(),
        ..ShortenPlan::default()
    };
    // (directory, link target name) → link name, for sibling links with a bare target
    let mut sibling_links: HashMap<(PathBuf, OsString), OsString> = HashMap::new();

    for result in walk(root) {
        plan.scanned += 1;
        if plan.scanned % 256 == 0 {
            progress.set_message(format!("{SCANNING_MESSAGE} {} entries", plan.scanned));
        }

        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                progress.suspend(|| warn!("Skipping entry: {e}"));
                plan.walk_errors.push(e.to_string());
                continue;
            }
        };

        if entry.is_symlink {
            if let Some(target) = bare_link_target(&entry.path) {
                sibling_links.insert(
                    (entry.parent().to_path_buf(), target),
                    entry.file_name.clone(),
                );
            }
        }

        match check_eligibility(&entry, config, now) {
            Eligibility::Eligible => {
                progress.suspend(|| debug!("Eligible: {}", entry.path.display()));
                plan.candidates.push(entry);
            }
            Eligibility::Ineligible(reason) if reason.is_notable() => {
                progress.suspend(|| info!("Skipping {}: {}", entry.path.display(), reason));
                plan.skipped.push((entry.path, reason));
            }
            Eligibility::Ineligible(_) => {}
        }
    }

    let (prior, candidates): (Vec<FileEntry>, Vec<FileEntry>) = plan
        .candidates
        .into_iter()
        .partition(|entry| is_prior_shortening(entry, &sibling_links));
    plan.candidates = candidates;
    for entry in prior {
        progress.suspend(|| {
            warn!(
                "Skipping {}: it is the short name of an earlier run with a different max length",
                entry.path.display()
            )
        });
        plan.skipped.push((entry.path, SkipReason::PriorShortening));
    }

    progress.suspend(|| {
        info!(
            "Planned {} file(s) out of {} scanned entries in {}",
            plan.candidates.len(),
            plan.scanned,
            root.display()
        )
    });
    plan
}

/// Target of the link at `path` when it is a plain sibling name like `short.txt`
fn bare_link_target(path: &Path) -> Option<OsString> {
    let target = std::fs::read_link(path).ok()?;
    let mut components = target.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) => Some(name.to_os_string()),
        _ => None,
    }
}

fn is_prior_shortening(
    entry: &FileEntry,
    sibling_links: &HashMap<(PathBuf, OsString), OsString>,
) -> bool {
    let key = (entry.parent().to_path_buf(), entry.file_name.clone());
    let Some(link_name) = sibling_links.get(&key) else {
        return false;
    };
    match (entry.base_name(), link_name.to_str()) {
        (Some(short), Some(long)) => is_shortened_form_of(short, long),
        _ => false,
    }
}
