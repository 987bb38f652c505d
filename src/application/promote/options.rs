//! Promote Options
//!
//! Everything a run needs, resolved once at the entry point.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::OverwriteMode;

/// Options for the promote use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoteOptions {
    /// Directory holding freshly built artifacts (`dist`)
    pub staging_root: PathBuf,
    /// Long-lived archive directory (`legacy`)
    pub archive_root: PathBuf,
    /// How confirmable groups are resolved
    pub mode: OverwriteMode,
}

impl PromoteOptions {
    pub fn new(staging_root: impl Into<PathBuf>, archive_root: impl Into<PathBuf>) -> Self {
        Self {
            staging_root: staging_root.into(),
            archive_root: archive_root.into(),
            mode: OverwriteMode::default(),
        }
    }

    /// Conventional `dist` / `legacy` siblings under a project root
    pub fn for_project(root: &Path) -> Self {
        Self::new(root.join("dist"), root.join("legacy"))
    }

    pub fn with_mode(mut self, mode: OverwriteMode) -> Self {
        self.mode = mode;
        self
    }
}
