//! File Candidate Entity

use std::path::{Path, PathBuf};

/// A file discovered under the staging root that qualifies for promotion.
///
/// Flags are snapshotted at collection time and never recomputed, so a
/// confirmation always acts on what the walk saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    source: PathBuf,
    destination: PathBuf,
    relative_path: PathBuf,
    file_name: String,
    exists_at_destination: bool,
    requires_confirmation: bool,
    release_file: bool,
}

impl FileCandidate {
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        relative_path: impl Into<PathBuf>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            relative_path: relative_path.into(),
            file_name: file_name.into(),
            exists_at_destination: false,
            requires_confirmation: false,
            release_file: false,
        }
    }

    pub fn with_exists_at_destination(mut self, exists: bool) -> Self {
        self.exists_at_destination = exists;
        self
    }

    pub fn with_requires_confirmation(mut self, requires: bool) -> Self {
        self.requires_confirmation = requires;
        self
    }

    /// Mark the file as part of a versioned release (see
    /// `PromotionPolicy::is_release_file`).
    pub fn with_release_file(mut self, release: bool) -> Self {
        self.release_file = release;
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Path relative to the staging root (and to the archive root)
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn exists_at_destination(&self) -> bool {
        self.exists_at_destination
    }

    pub fn requires_confirmation(&self) -> bool {
        self.requires_confirmation
    }

    pub fn is_release_file(&self) -> bool {
        self.release_file
    }
}
