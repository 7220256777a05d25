//! Test fixtures and builders

use anyhow::Result;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// A directory tree with automatic cleanup
pub struct TestTree {
    pub temp_dir: TempDir,
}

impl TestTree {
    /// Get the path to the tree root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a file (and its parent directories) relative to the root
    pub fn create_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let file_path = self.path().join(relative);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&file_path, content)?;
        Ok(file_path)
    }

    /// Create a file whose modification time lies `hours` in the past
    pub fn create_aged_file(&self, relative: &str, content: &str, hours: u64) -> Result<PathBuf> {
        let file_path = self.create_file(relative, content)?;
        let modified = SystemTime::now() - Duration::from_secs(hours * 3600);
        File::options()
            .write(true)
            .open(&file_path)?
            .set_modified(modified)?;
        Ok(file_path)
    }

    /// Create a relative symbolic link `link` → `target` inside the tree
    #[cfg(unix)]
    pub fn create_symlink(&self, target: &str, link: &str) -> Result<PathBuf> {
        let link_path = self.path().join(link);
        std::os::unix::fs::symlink(target, &link_path)?;
        Ok(link_path)
    }
}

/// Builder for creating test trees
#[derive(Default)]
pub struct TestTreeBuilder {
    files: Vec<(String, String)>,
    dirs: Vec<String>,
}

impl TestTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, relative: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.push((relative.into(), content.into()));
        self
    }

    pub fn with_dir(mut self, relative: impl Into<String>) -> Self {
        self.dirs.push(relative.into());
        self
    }

    pub fn build(self) -> Result<TestTree> {
        let tree = TestTree {
            temp_dir: TempDir::new()?,
        };

        for dir in &self.dirs {
            std::fs::create_dir_all(tree.path().join(dir))?;
        }
        for (relative, content) in &self.files {
            tree.create_file(relative, content)?;
        }

        Ok(tree)
    }
}
