//! Decides which walked entries get shortened

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::entry::FileEntry;
use crate::core::config::ShortenerConfig;

/// Why an entry was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Symlink,
    NotRegularFile,
    NonUtf8Name,
    WithinLimit,
    TooRecent,
    UnknownModifiedTime,
    /// Target of a sibling link left by a run with a different max length
    PriorShortening,
}

impl SkipReason {
    /// Whether the skip deserves a log line and a place in the summary.
    ///
    /// Links, directories and short names are the normal case and stay quiet.
    pub fn is_notable(self) -> bool {
        matches!(
            self,
            Self::NonUtf8Name
                | Self::TooRecent
                | Self::UnknownModifiedTime
                | Self::PriorShortening
        )
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Symlink => "already a symbolic link",
            Self::NotRegularFile => "not a regular file",
            Self::NonUtf8Name => "name is not valid UTF-8",
            Self::WithinLimit => "name within limit",
            Self::TooRecent => "modified too recently",
            Self::UnknownModifiedTime => "modification time unavailable",
            Self::PriorShortening => "short name from a run with a different max length",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Ineligible(SkipReason),
}

/// Checks every eligibility condition in turn; the first failing one is reported.
pub fn check_eligibility(
    entry: &FileEntry,
    config: &ShortenerConfig,
    now: DateTime<Utc>,
) -> Eligibility {
    if entry.is_symlink {
        return Eligibility::Ineligible(SkipReason::Symlink);
    }
    if !entry.is_file {
        return Eligibility::Ineligible(SkipReason::NotRegularFile);
    }

    let Some(length) = entry.name_length() else {
        // Byte length bounds the character count from above
        if entry.file_name.len() <= config.max_filename_length {
            return Eligibility::Ineligible(SkipReason::WithinLimit);
        }
        return Eligibility::Ineligible(SkipReason::NonUtf8Name);
    };
    if length <= config.max_filename_length {
        return Eligibility::Ineligible(SkipReason::WithinLimit);
    }

    if let Some(cutoff) = config.modified_cutoff(now) {
        match entry.modified {
            Some(modified) if modified < cutoff => {}
            Some(_) => return Eligibility::Ineligible(SkipReason::TooRecent),
            None => return Eligibility::Ineligible(SkipReason::UnknownModifiedTime),
        }
    }

    Eligibility::Eligible
}
