//! Collision-safe filename shortening
//!
//! A shortened name keeps the extension and truncates the stem so the whole name fits the
//! max length. When the plain truncation is taken, a `~<hash>` suffix derived from the full
//! original name is appended (re-truncating the stem), then `~<hash>2`, `~<hash>3` and so on.
//! When the stem budget is too small for a hash suffix, the counter alone is used
//! (`~1`, `~2`, ...).
//! The result depends only on the original name, the max length and the names already
//! present, so a retry after a crash derives the same name.

use sha2::{Digest, Sha256};
use std::collections::HashSet;

use super::error::ShortenError;
use crate::core::config::{
    COLLISION_SUFFIX_MARKER, EXTENSION_SEPARATOR, HASH_SUFFIX_LENGTH, MAX_COLLISION_ATTEMPTS,
};

/// Splits a file name into stem and extension at the last separator.
///
/// A leading dot marks a hidden file, not an extension.
pub fn split_name(name: &str) -> (&str, Option<&str>) {
    match name.rfind(EXTENSION_SEPARATOR) {
        Some(idx) if idx > 0 => (&name[..idx], Some(&name[idx + 1..])),
        _ => (name, None),
    }
}

/// Length of a name in characters, the unit the max length is expressed in
pub fn name_length(name: &str) -> usize {
    name.chars().count()
}

/// Computes a short name for `original_name` that is not in `existing_names`.
///
/// # Errors
/// - `Configuration` if `max_len` cannot hold the extension plus at least one stem
///   character (or, when a collision forces a suffix, one stem character and `~N`)
/// - `CollisionsExhausted` if every suffixed candidate is taken
pub fn shorten(
    original_name: &str,
    max_len: usize,
    existing_names: &HashSet<String>,
) -> Result<String, ShortenError> {
    let (stem, extension) = split_name(original_name);
    let reserved = extension.map_or(0, |ext| name_length(ext) + 1);

    let stem_budget = max_len
        .checked_sub(reserved)
        .filter(|budget| *budget > 0)
        .ok_or_else(|| ShortenError::Configuration {
            name: original_name.to_string(),
            max_len,
            required: reserved + 1,
        })?;

    let hash = name_hash(original_name);

    for attempt in 0..=MAX_COLLISION_ATTEMPTS {
        let mut suffix = collision_suffix(&hash, attempt);
        if name_length(&suffix) >= stem_budget {
            suffix = counter_suffix(attempt);
        }
        let suffix_len = name_length(&suffix);
        if suffix_len >= stem_budget {
            return Err(ShortenError::Configuration {
                name: original_name.to_string(),
                max_len,
                required: reserved + suffix_len + 1,
            });
        }

        let candidate = build_name(stem, stem_budget - suffix_len, &suffix, extension);
        if !existing_names.contains(&candidate) {
            return Ok(candidate);
        }
    }

    Err(ShortenError::CollisionsExhausted {
        name: original_name.to_string(),
        attempts: MAX_COLLISION_ATTEMPTS,
    })
}

/// True if `short_name` looks like a shortening of `long_name`.
///
/// Used to recognise files left behind by an earlier run: same extension, and the long
/// stem starts with the short stem once any collision suffix is removed.
pub fn is_shortened_form_of(short_name: &str, long_name: &str) -> bool {
    if name_length(short_name) >= name_length(long_name) {
        return false;
    }

    let (short_stem, short_ext) = split_name(short_name);
    let (long_stem, long_ext) = split_name(long_name);
    if short_ext != long_ext {
        return false;
    }

    let base = strip_collision_suffix(short_stem);
    !base.is_empty() && long_stem.starts_with(base)
}

fn strip_collision_suffix(stem: &str) -> &str {
    match stem.rsplit_once(COLLISION_SUFFIX_MARKER) {
        Some((base, suffix))
            if !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_hexdigit()) =>
        {
            base
        }
        _ => stem,
    }
}

fn name_hash(name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    let digest = hasher.finalize();
    let hex = format!("{digest:x}");
    hex[..HASH_SUFFIX_LENGTH].to_string()
}

fn collision_suffix(hash: &str, attempt: u32) -> String {
    match attempt {
        0 => String::new(),
        1 => format!("{COLLISION_SUFFIX_MARKER}{hash}"),
        n => format!("{COLLISION_SUFFIX_MARKER}{hash}{n}"),
    }
}

fn counter_suffix(attempt: u32) -> String {
    format!("{COLLISION_SUFFIX_MARKER}{attempt}")
}

fn build_name(stem: &str, stem_chars: usize, suffix: &str, extension: Option<&str>) -> String {
    let mut name: String = stem.chars().take(stem_chars).collect();
    name.push_str(suffix);
    if let Some(ext) = extension {
        name.push(EXTENSION_SEPARATOR);
        name.push_str(ext);
    }
    name
}
