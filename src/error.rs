//! Error types for legacy-promote
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for promotion operations
pub type PromoteResult<T> = Result<T, PromoteError>;

/// Main error type for promotion operations
#[derive(Error, Debug)]
pub enum PromoteError {
    /// Staging root does not exist (nothing has been built yet)
    #[error("staging directory not found: {path} (run the build first)")]
    StagingNotFound { path: PathBuf },

    /// Staging root exists but is not a directory
    #[error("staging path is not a directory: {path}")]
    StagingNotADirectory { path: PathBuf },

    /// One root lies inside the other, so mirroring would recurse into itself
    #[error("staging {staging} and archive {archive} must not contain each other")]
    OverlappingRoots { staging: PathBuf, archive: PathBuf },

    /// Filesystem failure while mirroring or copying
    #[error(transparent)]
    Fs(#[from] FsError),

    /// Configuration file could not be read or parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}
