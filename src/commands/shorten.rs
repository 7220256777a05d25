//! Shorten command implementation
//!
//! This module handles the whole run:
//! - Setup checks (platform, target directory, configuration)
//! - Planning with a scan spinner
//! - Confirmation before anything is renamed
//! - Sequential execution and the final report

use anyhow::{Context, Result};
use chrono::Utc;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

use crate::core::config::{
    APP_TITLE, CONFIRMATION_DECLINED_MESSAGE, CONFIRMATION_PROMPT, NOTHING_TO_SHORTEN_MESSAGE,
    NO_FILES_MESSAGE,
};
use crate::core::{
    create_scan_spinner, resolve_config, set_terminal_title, set_terminal_title_and_flush,
    validate_root, FileSettings, ShortenStatistics,
};
use crate::shortener::{execute_plan, plan_shortening, ShortenError};

/// Arguments of the shorten command, as parsed from the command line
#[derive(Debug, Clone, Default)]
pub struct ShortenArgs {
    pub directory: PathBuf,
    /// Only files modified more than this many hours ago
    pub min_age_hours: Option<u64>,
    pub max_length: Option<usize>,
    pub config_path: Option<PathBuf>,
    /// Skip the confirmation prompt
    pub assume_yes: bool,
    pub dry_run: bool,
    pub json: bool,
}

/// Main handler for the shorten command
///
/// Returns the run statistics; the caller decides the exit status from them.
pub fn handle_shorten_command(args: &ShortenArgs) -> Result<ShortenStatistics> {
    let stdin = io::stdin();
    handle_shorten_command_with_input(args, &mut stdin.lock())
}

/// Same as [`handle_shorten_command`] with the confirmation answer read from `input`
pub fn handle_shorten_command_with_input(
    args: &ShortenArgs,
    input: &mut impl BufRead,
) -> Result<ShortenStatistics> {
    set_terminal_title(&format!("🚀 {APP_TITLE}"));
    let result = run(args, input);
    set_terminal_title_and_flush(&format!("✅ {APP_TITLE}"));
    result
}

fn run(args: &ShortenArgs, input: &mut impl BufRead) -> Result<ShortenStatistics> {
    ensure_supported_platform(&args.directory)?;

    let settings = FileSettings::load(args.config_path.as_deref())?;
    let config = resolve_config(args.max_length, args.min_age_hours, args.dry_run, &settings)?;
    let root = validate_root(&args.directory)?;

    info!(
        "Shortening names longer than {} characters under {}{}",
        config.max_filename_length,
        root.display(),
        config
            .min_age_hours
            .map(|hours| format!(" (files older than {hours}h only)"))
            .unwrap_or_default()
    );

    let start_time = Instant::now();
    let spinner = create_scan_spinner()?;
    let plan = plan_shortening(&root, &config, Utc::now(), &spinner);
    spinner.finish_and_clear();

    let mut statistics = ShortenStatistics::from_plan(&plan, config.dry_run);

    if plan.is_empty() {
        if !args.json {
            println!("{}", nothing_to_do_message(&statistics));
        }
        println!("{}", render_report(&statistics, start_time.elapsed(), args.json)?);
        return Ok(statistics);
    }

    println!(
        "Going to process {} files in {}",
        plan.candidates.len(),
        root.display()
    );

    if !args.assume_yes && !config.dry_run && !confirm(input)? {
        println!("{CONFIRMATION_DECLINED_MESSAGE}");
        return Ok(statistics);
    }

    execute_plan(&plan, &config, &mut statistics);

    if !args.json {
        println!();
    }
    println!("{}", render_report(&statistics, start_time.elapsed(), args.json)?);

    Ok(statistics)
}

/// Final report: pretty JSON, or the summary line followed by any detail sections
fn render_report(statistics: &ShortenStatistics, duration: Duration, json: bool) -> Result<String> {
    if json {
        return Ok(statistics.to_json(duration)?);
    }

    let mut report = statistics.generate_summary(duration);
    let details = statistics.generate_detailed_summary();
    if !details.is_empty() {
        report.push_str("\n\n");
        report.push_str(&details);
    }
    Ok(report)
}

fn nothing_to_do_message(statistics: &ShortenStatistics) -> &'static str {
    if statistics.skipped > 0 {
        NOTHING_TO_SHORTEN_MESSAGE
    } else {
        NO_FILES_MESSAGE
    }
}

/// Asks for a `y` on `input`. Anything else, including end of input, declines.
fn confirm(input: &mut impl BufRead) -> Result<bool> {
    println!("{CONFIRMATION_PROMPT}");
    io::stdout().flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("failed to read confirmation")?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

#[cfg(unix)]
fn ensure_supported_platform(_root: &Path) -> Result<(), ShortenError> {
    Ok(())
}

#[cfg(not(unix))]
fn ensure_supported_platform(root: &Path) -> Result<(), ShortenError> {
    Err(ShortenError::Setup {
        path: root.to_path_buf(),
        message: "symbolic link substitution is only supported on unix platforms".to_string(),
    })
}
