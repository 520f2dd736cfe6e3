//! Finding and reading TODO files
//!
//! Only the target directory itself is checked, for a fixed list of file
//! name spellings. On case-insensitive filesystems several spellings can
//! resolve to the same file; each file is reported once.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

/// File names checked, in order
pub const CANDIDATE_NAMES: [&str; 5] = ["TODO.md", "todo.md", "TODO.MD", "Todo.md", "ToDo.md"];

/// A candidate file that exists but couldn't be read as UTF-8 text
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read {}: {source}", .path.display())]
    Unreadable { path: PathBuf, source: io::Error },
}

/// Locates TODO files in a single directory
#[derive(Debug, Clone)]
pub struct TodoLocator {
    dir: PathBuf,
}

impl TodoLocator {
    /// Creates a locator for the given directory
    ///
    /// A directory that doesn't exist simply holds no candidates.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a locator for the current working directory
    pub fn current() -> Result<Self> {
        let dir = std::env::current_dir().context("Failed to determine current directory")?;
        Ok(Self::new(dir))
    }

    /// Returns the directory being searched
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// All paths checked, in order
    pub fn candidates(&self) -> impl Iterator<Item = PathBuf> + '_ {
        CANDIDATE_NAMES.iter().map(|name| self.dir.join(name))
    }

    /// Returns the candidates that exist, dropping any that resolve to a file
    /// already found
    pub fn find(&self) -> Vec<PathBuf> {
        let mut seen = HashSet::new();

        self.candidates()
            .filter(|path| path.exists())
            .filter(|path| match file_identity(path) {
                Some(id) => seen.insert(id),
                None => true,
            })
            .collect()
    }
}

#[cfg(unix)]
type FileIdentity = (u64, u64);

#[cfg(not(unix))]
type FileIdentity = PathBuf;

/// Device and inode, so hard links and case variants compare equal
#[cfg(unix)]
fn file_identity(path: &Path) -> Option<FileIdentity> {
    use std::os::unix::fs::MetadataExt;

    let meta = fs::metadata(path).ok()?;
    Some((meta.dev(), meta.ino()))
}

#[cfg(not(unix))]
fn file_identity(path: &Path) -> Option<FileIdentity> {
    fs::canonicalize(path).ok()
}

/// Reads a whole file as UTF-8
pub fn read_source(path: &Path) -> std::result::Result<String, SourceError> {
    fs::read_to_string(path).map_err(|source| SourceError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}
