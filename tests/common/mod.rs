//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod fs;

pub use self::fixtures::{TestTree, TestTreeBuilder};
pub use self::fs::{is_regular_file, is_symlink, long_name, regular_file_names};
