//! # filename-shortener
//!
//! `filename-shortener` shortens filenames that exceed a maximum length while keeping
//! every original name usable: the file is renamed to a short name and a symbolic link
//! with the old name is left pointing at it. It powers the `shorten-names` CLI tool.
//!
//! ## Core Features
//!
//! - **Extension-preserving names**: only the stem is truncated.
//! - **Collision safety**: clashing truncations get a deterministic hash (or counter)
//!   suffix.
//! - **Re-runnable**: renamed files and links are never picked up again, and short names
//!   left by a run with a different max length are skipped rather than shortened twice.
//! - **Age filter**: optionally leave recently modified files alone.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use filename_shortener::core::{ShortenStatistics, ShortenerConfig};
//! use filename_shortener::shortener::{execute_plan, plan_shortening};
//! use indicatif::ProgressBar;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ShortenerConfig::new(143).with_min_age_hours(24);
//!     let plan = plan_shortening(Path::new("/data"), &config, Utc::now(), &ProgressBar::hidden());
//!
//!     let mut stats = ShortenStatistics::from_plan(&plan, config.dry_run);
//!     execute_plan(&plan, &config, &mut stats);
//!     println!("{} files shortened", stats.shortened);
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod core;
pub mod shortener;
pub mod utils;
