//! Statistics tracking for shortening runs

use serde::Serialize;
use std::time::Duration;

use crate::core::config::{
    ERROR_MESSAGE_MAX_LENGTH, ERROR_MESSAGE_TRUNCATE_LENGTH, PATH_DISPLAY_WIDTH,
};
use crate::shortener::{Outcome, ShortenError, ShortenPlan};

/// One file mentioned in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub path: String,
    pub detail: String,
}

impl FileRecord {
    fn new(path: &std::path::Path, detail: impl Into<String>) -> Self {
        Self {
            path: path.display().to_string(),
            detail: detail.into(),
        }
    }
}

/// Statistics for tracking the results of one run
///
/// Processing is sequential, so plain counters are enough.
#[derive(Debug, Default, Serialize)]
pub struct ShortenStatistics {
    pub dry_run: bool,
    pub scanned: usize,
    pub eligible: usize,
    pub shortened: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Renamed but missing the link at the old path; subset of `failed`
    pub unlinked: usize,
    pub shortened_files: Vec<FileRecord>, // path → new path
    pub skipped_files: Vec<FileRecord>,   // path → reason
    pub failed_files: Vec<FileRecord>,    // path → error, missing links excluded
    pub unlinked_files: Vec<FileRecord>,  // old path → new path
    pub walk_errors: Vec<String>,
}

impl ShortenStatistics {
    /// Creates a new statistics tracker with all counters initialized to zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a tracker from what the planning walk found
    pub fn from_plan(plan: &ShortenPlan, dry_run: bool) -> Self {
        let mut stats = Self {
            dry_run,
            scanned: plan.scanned,
            eligible: plan.candidates.len(),
            walk_errors: plan.walk_errors.clone(),
            ..Self::new()
        };
        for (path, reason) in &plan.skipped {
            stats.skipped += 1;
            stats.skipped_files.push(FileRecord::new(path, reason.to_string()));
        }
        stats
    }

    /// Updates statistics based on the outcome of one file
    pub fn update(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Shortened { from, to } | Outcome::Planned { from, to } => {
                self.shortened += 1;
                self.shortened_files
                    .push(FileRecord::new(from, to.display().to_string()));
            }
            Outcome::Skipped { path, error } => {
                self.skipped += 1;
                self.skipped_files
                    .push(FileRecord::new(path, describe_error(error)));
            }
            Outcome::Failed { path, error } => {
                self.failed += 1;
                if let ShortenError::Link { to, .. } = error {
                    self.unlinked += 1;
                    self.unlinked_files
                        .push(FileRecord::new(path, to.display().to_string()));
                } else {
                    self.failed_files
                        .push(FileRecord::new(path, describe_error(error)));
                }
            }
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Generates a summary string of the run results
    pub fn generate_summary(&self, duration: Duration) -> String {
        let duration_secs = duration.as_secs_f64();
        let verb = if self.dry_run {
            "would be shortened"
        } else {
            "shortened"
        };

        let mut summary = format!(
            "✅ Completed in {:.1}s • {} scanned • {} {} • {} skipped",
            duration_secs, self.scanned, self.shortened, verb, self.skipped
        );
        if self.failed > 0 {
            summary.push_str(&format!(" • {} failed", self.failed));
        }
        if !self.walk_errors.is_empty() {
            summary.push_str(&format!(" • {} unreadable", self.walk_errors.len()));
        }

        summary
    }

    /// Generates detailed messages for files needing attention
    pub fn generate_detailed_summary(&self) -> String {
        let mut lines = Vec::new();

        // Partial states first, they need manual repair
        if !self.unlinked_files.is_empty() {
            lines.push(format!(
                "🔴 RENAMED BUT NOT LINKED ({})",
                self.unlinked_files.len()
            ));
            push_tree(&mut lines, &self.unlinked_files, |record| {
                format!(
                    "{} # ln -s {} {}",
                    shorten_for_display(&record.path),
                    shell_quote(&file_name_of(&record.detail)),
                    shell_quote(&record.path)
                )
            });
            lines.push(String::new());
        }

        if !self.failed_files.is_empty() {
            lines.push(format!("❌ FAILED FILES ({})", self.failed_files.len()));
            push_tree(&mut lines, &self.failed_files, |record| {
                format!(
                    "{:width$} # {}",
                    shorten_for_display(&record.path),
                    record.detail,
                    width = PATH_DISPLAY_WIDTH
                )
            });
            lines.push(String::new());
        }

        if !self.skipped_files.is_empty() {
            lines.push(format!("🟡 SKIPPED FILES ({})", self.skipped_files.len()));
            push_tree(&mut lines, &self.skipped_files, |record| {
                format!(
                    "{:width$} # {}",
                    shorten_for_display(&record.path),
                    record.detail,
                    width = PATH_DISPLAY_WIDTH
                )
            });
            lines.push(String::new());
        }

        if !self.walk_errors.is_empty() {
            lines.push(format!("⚠️  UNREADABLE ENTRIES ({})", self.walk_errors.len()));
            for (i, message) in self.walk_errors.iter().enumerate() {
                let tree_char = if i == self.walk_errors.len() - 1 {
                    "└─"
                } else {
                    "├─"
                };
                lines.push(format!("   {} {}", tree_char, clean_error_message(message)));
            }
        }

        // Remove trailing blank line if it exists
        if lines.last() == Some(&String::new()) {
            lines.pop();
        }

        lines.join("\n")
    }

    /// Full report as pretty JSON
    pub fn to_json(&self, duration: Duration) -> serde_json::Result<String> {
        let report = serde_json::json!({
            "duration_secs": duration.as_secs_f64(),
            "statistics": self,
        });
        serde_json::to_string_pretty(&report)
    }
}

fn push_tree(
    lines: &mut Vec<String>,
    records: &[FileRecord],
    render: impl Fn(&FileRecord) -> String,
) {
    for (i, record) in records.iter().enumerate() {
        let tree_char = if i == records.len() - 1 {
            "└─"
        } else {
            "├─"
        };
        lines.push(format!("   {} {}", tree_char, render(record)));
    }
}

fn shorten_for_display(path: &str) -> String {
    crate::utils::shorten_path(path, PATH_DISPLAY_WIDTH)
}

fn file_name_of(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// Quotes `text` for a POSIX shell when it holds anything beyond plain path characters
pub(crate) fn shell_quote(text: &str) -> String {
    let plain = !text.is_empty()
        && text.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | '+' | ',' | ':' | '@')
        });
    if plain {
        text.to_string()
    } else {
        format!("'{}'", text.replace('\'', r"'\''"))
    }
}

/// Short, path-free description of an error for the report
pub(crate) fn describe_error(error: &ShortenError) -> String {
    match error {
        ShortenError::Configuration { required, .. } => {
            format!("max length too small, needs at least {required}")
        }
        ShortenError::Vanished { .. } => "disappeared during the run".to_string(),
        ShortenError::Collision { path } => {
            format!("{} already exists", file_name_of(&path.display().to_string()))
        }
        ShortenError::CollisionsExhausted { attempts, .. } => {
            format!("no free short name after {attempts} attempts")
        }
        ShortenError::Rename { source, .. }
        | ShortenError::Link { source, .. }
        | ShortenError::Io { source, .. } => clean_error_message(&source.to_string()),
        other => clean_error_message(&other.to_string()),
    }
}

/// Cleans and formats error messages for display
pub(crate) fn clean_error_message(error: &str) -> String {
    // Replace newlines/tabs with spaces and collapse whitespace
    let cleaned = error
        .replace('\n', " ")
        .replace('\r', "")
        .replace('\t', " ");
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    // Extract key error patterns
    if cleaned.contains("Permission denied") {
        "permission denied".to_string()
    } else if cleaned.contains("No space left") {
        "disk full".to_string()
    } else if cleaned.contains("Invalid cross-device link") {
        "cross-device rename".to_string()
    } else if cleaned.contains("Read-only file system") {
        "read-only file system".to_string()
    } else if cleaned.chars().count() > ERROR_MESSAGE_MAX_LENGTH {
        // Truncate long messages on a character boundary
        let truncated: String = cleaned.chars().take(ERROR_MESSAGE_TRUNCATE_LENGTH).collect();
        format!("{truncated}...")
    } else {
        cleaned
    }
}
