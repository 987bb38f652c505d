//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{EntryKind, FileSystem, FsEntry, FsError, FsResult};

const TEMP_PREFIX: &str = ".legacy-promote-";

/// Local file system implementation
///
/// Copies go through a temp file in the destination directory that is then
/// renamed over the target, unless atomic copies are disabled.
#[derive(Debug, Clone, Copy)]
pub struct LocalFs {
    atomic: bool,
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalFs {
    /// Create a new LocalFs instance with atomic copies
    pub fn new() -> Self {
        Self { atomic: true }
    }

    pub fn with_atomic_copies(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    pub fn atomic_copies(&self) -> bool {
        self.atomic
    }

    fn copy_atomic(&self, from: &Path, to: &Path) -> FsResult<()> {
        let copy_err = |source: io::Error| FsError::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        };

        let parent = to
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut source = fs::File::open(from).map_err(copy_err)?;
        let mut temp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempfile_in(parent)
            .map_err(copy_err)?;

        io::copy(&mut source, temp.as_file_mut()).map_err(copy_err)?;

        if let Ok(meta) = source.metadata() {
            // Best effort: keep the staged file's mode bits
            let _ = temp.as_file().set_permissions(meta.permissions());
        }

        temp.persist(to).map_err(|e| FsError::Persist {
            path: to.to_path_buf(),
            source: e.error,
        })?;
        Ok(())
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<FsEntry>> {
        let read_err = |source: io::Error| FsError::ReadDir {
            path: path.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let entry_path = entry.path();
            let kind = match fs::metadata(&entry_path) {
                Ok(meta) if meta.is_dir() => EntryKind::Directory,
                Ok(meta) if meta.is_file() => EntryKind::File,
                _ => EntryKind::Other,
            };
            entries.push(FsEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry_path,
                kind,
            });
        }

        // Sort by name for deterministic output
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|source| FsError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
    }

    fn copy(&self, from: &Path, to: &Path) -> FsResult<()> {
        if self.atomic {
            return self.copy_atomic(from, to);
        }

        fs::copy(from, to)
            .map(|_| ())
            .map_err(|source| FsError::Copy {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                source,
            })
    }

    /// Canonicalize the deepest existing ancestor and re-append the rest.
    fn canonicalize(&self, path: &Path) -> PathBuf {
        let mut missing: Vec<OsString> = Vec::new();
        let mut current = path;
        loop {
            if let Ok(resolved) = current.canonicalize() {
                return missing
                    .iter()
                    .rev()
                    .fold(resolved, |acc, name| acc.join(name));
            }
            match (current.parent(), current.file_name()) {
                (Some(parent), Some(name)) => {
                    missing.push(name.to_os_string());
                    current = parent;
                }
                _ => return path.to_path_buf(),
            }
        }
    }
}
