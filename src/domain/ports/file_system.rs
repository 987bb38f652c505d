//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the promotion pipeline to walk and copy trees
//! without depending on a concrete implementation.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors. Every variant names the offending path.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("failed to read directory {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy {from} to {to}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to replace {path}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Kind of a directory entry (symlinks are resolved)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Sockets, dangling links, devices - never promoted
    Other,
}

/// One directory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
pub trait FileSystem {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// List a directory's entries, sorted by name
    fn read_dir(&self, path: &Path) -> FsResult<Vec<FsEntry>>;

    /// Create directory and parents (idempotent)
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Copy a file, replacing any existing destination
    fn copy(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Resolve a path for containment checks; the path need not exist.
    fn canonicalize(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}
