//! Configuration constants and settings

use anyhow::{bail, Context, Result};
use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// Length Configuration
//
// The max length must stay the same across runs against one tree. Files shortened by an
// earlier run with a larger limit become eligible again under a smaller one, which would
// shorten them twice. The planner refuses such runs instead of guessing.

/// Built-in limit used when no flag, env var or config file sets one
pub const DEFAULT_MAX_FILENAME_LENGTH: usize = 143;

/// Environment variable that overrides the config file's max length
pub const MAX_LENGTH_ENV_VAR: &str = "SHORTENER_MAX_LENGTH";

/// Environment variable holding the tracing filter (falls back to `RUST_LOG`)
pub const LOG_ENV_VAR: &str = "SHORTENER_LOG";

// Config file location under the platform config dir
pub const CONFIG_DIR_NAME: &str = "filename-shortener";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// Naming rules
pub const EXTENSION_SEPARATOR: char = '.';
pub const COLLISION_SUFFIX_MARKER: char = '~';
pub const HASH_SUFFIX_LENGTH: usize = 8; // hex digits of SHA-256 kept in a collision suffix
pub const MAX_COLLISION_ATTEMPTS: u32 = 64;

// UI Constants
pub const SCANNING_MESSAGE: &str = "🔍 Scanning for long filenames...";
pub const NO_FILES_MESSAGE: &str = "No filenames longer than the limit were found.";
pub const NOTHING_TO_SHORTEN_MESSAGE: &str =
    "No files to shorten; every long filename found was skipped.";
pub const CONFIRMATION_PROMPT: &str = "Press y to continue";
pub const CONFIRMATION_DECLINED_MESSAGE: &str = "Stopping as you have not pressed y to confirm";
pub const SPINNER_TEMPLATE: &str = "{spinner} {wide_msg}";
pub const SPINNER_TICK_MILLIS: u64 = 120;
pub const APP_TITLE: &str = "shorten-names";

// Display formatting constants
pub const PATH_DISPLAY_WIDTH: usize = 40;
pub const ERROR_MESSAGE_MAX_LENGTH: usize = 60;
pub const ERROR_MESSAGE_TRUNCATE_LENGTH: usize = 57;

/// Settings read from the optional TOML config file
///
/// ```toml
/// max_filename_length = 143
/// min_age_hours = 24
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
    pub max_filename_length: Option<usize>,
    pub min_age_hours: Option<u64>,
}

impl FileSettings {
    /// Default config file location, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads settings from `path`, or from the default location when `path` is `None`.
    ///
    /// An explicitly given file must exist. A missing default file yields empty settings.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(default) if default.is_file() => Self::from_file(&default),
                _ => Ok(Self::default()),
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Everything the shortening pass needs, passed explicitly through the call chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortenerConfig {
    /// Longest file name (in characters) left untouched
    pub max_filename_length: usize,
    /// Only files last modified more than this many hours ago are eligible
    pub min_age_hours: Option<u64>,
    /// Log planned renames without touching the tree
    pub dry_run: bool,
}

impl ShortenerConfig {
    pub fn new(max_filename_length: usize) -> Self {
        Self {
            max_filename_length,
            min_age_hours: None,
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_min_age_hours(mut self, hours: u64) -> Self {
        self.min_age_hours = Some(hours);
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Latest modification time a file may have to still be eligible.
    ///
    /// Returns `None` without an age filter. An age too large to represent yields the
    /// earliest representable instant, so nothing passes the filter.
    pub fn modified_cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let hours = self.min_age_hours?;
        let cutoff = i64::try_from(hours)
            .ok()
            .and_then(TimeDelta::try_hours)
            .and_then(|age| now.checked_sub_signed(age))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Some(cutoff)
    }
}

/// Determines the max filename length from CLI args, environment and config file
///
/// Priority order:
/// 1. --max-length N flag → N
/// 2. SHORTENER_MAX_LENGTH env var → N
/// 3. `max_filename_length` in the config file → N
/// 4. Built-in default → 143
pub fn resolve_max_length(cli_max_length: Option<usize>, settings: &FileSettings) -> Result<usize> {
    let env_value = std::env::var(MAX_LENGTH_ENV_VAR).ok();
    resolve_max_length_from(cli_max_length, env_value.as_deref(), settings)
}

fn resolve_max_length_from(
    cli_max_length: Option<usize>,
    env_value: Option<&str>,
    settings: &FileSettings,
) -> Result<usize> {
    let max_length = if let Some(n) = cli_max_length {
        n
    } else if let Some(raw) = env_value {
        raw.trim()
            .parse::<usize>()
            .with_context(|| format!("{MAX_LENGTH_ENV_VAR} must be a positive integer, got {raw:?}"))?
    } else {
        settings
            .max_filename_length
            .unwrap_or(DEFAULT_MAX_FILENAME_LENGTH)
    };

    if max_length == 0 {
        bail!("max filename length must be at least 1");
    }

    Ok(max_length)
}

/// Builds the run configuration. A positional age argument wins over the config file.
pub fn resolve_config(
    cli_max_length: Option<usize>,
    cli_min_age_hours: Option<u64>,
    dry_run: bool,
    settings: &FileSettings,
) -> Result<ShortenerConfig> {
    let mut config = ShortenerConfig::new(resolve_max_length(cli_max_length, settings)?)
        .with_dry_run(dry_run);
    config.min_age_hours = cli_min_age_hours.or(settings.min_age_hours);
    Ok(config)
}
