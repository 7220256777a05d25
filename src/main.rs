//! shorten-names: shorten overlong filenames, keeping the old names as symbolic links
//! This tool walks a directory tree, renames every file whose name exceeds the limit and
//! links the old name to the new one.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as ClapCommand};
use std::path::PathBuf;

use filename_shortener::commands::{handle_shorten_command, ShortenArgs};
use filename_shortener::utils::init_logging;

fn build_cli() -> ClapCommand {
    ClapCommand::new("shorten-names")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Shorten overlong filenames and leave symbolic links under the old names")
        .after_help(
            "Keep the max length the same for every run against one tree. \
             Redirect output to keep a record: shorten-names DIR >> shorten.log 2>&1",
        )
        .arg(
            Arg::new("directory")
                .value_name("DIRECTORY")
                .help("Directory to process recursively")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("hours")
                .value_name("HOURS")
                .help("Only process files last modified more than HOURS hours ago")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("max-length")
                .long("max-length")
                .value_name("N")
                .help("Longest filename left untouched (default: config file or 143)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("TOML config file with max_filename_length and min_age_hours")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("yes")
                .short('y')
                .long("yes")
                .help("Do not ask for confirmation (for cron jobs)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Show what would be renamed without changing anything")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the final report as JSON")
                .action(ArgAction::SetTrue),
        )
}

fn parse_args(matches: &ArgMatches) -> ShortenArgs {
    ShortenArgs {
        directory: matches
            .get_one::<PathBuf>("directory")
            .cloned()
            .unwrap_or_default(),
        min_age_hours: matches.get_one::<u64>("hours").copied(),
        max_length: matches.get_one::<usize>("max-length").copied(),
        config_path: matches.get_one::<PathBuf>("config").cloned(),
        assume_yes: matches.get_flag("yes"),
        dry_run: matches.get_flag("dry-run"),
        json: matches.get_flag("json"),
    }
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let args = parse_args(&matches);

    init_logging().context("failed to initialise logging")?;

    let statistics = handle_shorten_command(&args)?;

    // Per-file failures don't stop the run, but they do fail the exit status
    if statistics.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
