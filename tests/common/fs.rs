//! Filesystem inspection helpers

use std::path::Path;

/// Builds a name of exactly `length` characters ending in `.{extension}`
pub fn long_name(length: usize, extension: &str) -> String {
    let suffix = format!(".{extension}");
    assert!(length > suffix.len(), "length must leave room for a stem");
    format!("{}{}", "l".repeat(length - suffix.len()), suffix)
}

pub fn is_symlink(path: &Path) -> bool {
    std::fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
}

pub fn is_regular_file(path: &Path) -> bool {
    std::fs::symlink_metadata(path)
        .map(|m| m.file_type().is_file())
        .unwrap_or(false)
}

/// Sorted names of the regular files directly inside `dir`
pub fn regular_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .filter_map(Result::ok)
        .filter(|entry| is_regular_file(&entry.path()))
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
