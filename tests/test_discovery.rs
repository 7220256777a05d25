//! Integration tests for tree walking and target validation

mod common;

use common::{long_name, TestTreeBuilder};
use filename_shortener::core::{validate_root, walk};
use filename_shortener::shortener::{FileEntry, ShortenError};

fn collect(root: &std::path::Path) -> Vec<FileEntry> {
    walk(root)
        .map(|entry| entry.expect("walk should succeed"))
        .collect()
}

#[test]
fn test_walk_order_is_stable() {
    let tree = TestTreeBuilder::new()
        .with_file("b/second.txt", "")
        .with_file("a/first.txt", "")
        .with_file("c.txt", "")
        .build()
        .expect("Failed to create tree");

    let first: Vec<_> = collect(tree.path()).into_iter().map(|e| e.path).collect();
    let second: Vec<_> = collect(tree.path()).into_iter().map(|e| e.path).collect();

    assert_eq!(first, second);
    let files: Vec<_> = collect(tree.path())
        .into_iter()
        .filter(|e| e.is_file)
        .filter_map(|e| e.base_name().map(str::to_string))
        .collect();
    assert_eq!(files, vec!["first.txt", "second.txt", "c.txt"]);
}

#[test]
fn test_walk_reports_lengths_in_characters() {
    let name = format!("{}.txt", "é".repeat(30));
    let tree = TestTreeBuilder::new()
        .with_file(&name, "")
        .build()
        .expect("Failed to create tree");

    let entries = collect(tree.path());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name_length(), Some(34));
    assert_eq!(entries[0].base_name(), Some(name.as_str()));
}

#[test]
fn test_walk_includes_directories_without_descending_into_root() {
    let tree = TestTreeBuilder::new()
        .with_dir(long_name(60, "d"))
        .with_file("plain.txt", "")
        .build()
        .expect("Failed to create tree");

    let entries = collect(tree.path());
    assert_eq!(entries.len(), 2);
    assert_eq!(entries.iter().filter(|e| !e.is_file).count(), 1);
    assert!(entries.iter().all(|e| e.parent() == tree.path()));
}

#[cfg(unix)]
#[test]
fn test_walk_reports_dangling_links() {
    let tree = TestTreeBuilder::new().build().expect("Failed to create tree");
    tree.create_symlink("nowhere.txt", "dangling.txt")
        .expect("Failed to create link");

    let entries = collect(tree.path());
    assert_eq!(entries.len(), 1);
    assert!(entries[0].is_symlink);
    assert!(!entries[0].is_file);
}

#[test]
fn test_validate_root_canonicalizes() {
    let tree = TestTreeBuilder::new()
        .with_dir("inner")
        .build()
        .expect("Failed to create tree");

    let dotted = tree.path().join("inner").join("..");
    let root = validate_root(&dotted).expect("root should be valid");
    assert_eq!(
        root,
        tree.path().canonicalize().expect("Failed to canonicalize")
    );
}

#[test]
fn test_validate_root_rejects_bad_targets() {
    let tree = TestTreeBuilder::new()
        .with_file("file.txt", "")
        .build()
        .expect("Failed to create tree");

    let err = validate_root(tree.path().join("file.txt")).unwrap_err();
    assert!(matches!(err, ShortenError::Setup { .. }));
    assert!(err.to_string().contains("not a directory"));

    let err = validate_root(tree.path().join("missing")).unwrap_err();
    assert!(matches!(err, ShortenError::Setup { .. }));
}
