//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Directory walking and root validation
//! - Run configuration
//! - Statistics tracking
//!
//! Internal implementation details are not exposed through this API.

// Core types
pub use super::config::{FileSettings, ShortenerConfig};
pub use super::stats::{FileRecord, ShortenStatistics};

// Discovery
pub use super::discovery::{validate_root, walk};

// Configuration
pub use super::config::{resolve_config, resolve_max_length};
pub use super::config::{DEFAULT_MAX_FILENAME_LENGTH, LOG_ENV_VAR, MAX_LENGTH_ENV_VAR};

// Progress
pub use super::progress::create_scan_spinner;

// Terminal utilities (re-exported from utils)
pub use crate::utils::{set_terminal_title, set_terminal_title_and_flush};
