//! Promote Report
//!
//! Session log of a promotion run.

use std::path::PathBuf;

use crate::domain::value_objects::Decision;

/// What happened to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    /// Copied to a destination that did not exist
    Copied,
    /// Copied over an existing archived file
    Overwritten,
    /// Left untouched
    Skipped,
}

impl FileAction {
    pub fn as_str(self) -> &'static str {
        match self {
            FileAction::Copied => "copied",
            FileAction::Overwritten => "overwritten",
            FileAction::Skipped => "skipped",
        }
    }
}

/// One entry of the session log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub relative_path: PathBuf,
    pub action: FileAction,
}

/// How one version group was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOutcome {
    pub component: String,
    pub version: String,
    pub decision: Decision,
    /// Whether the operator was asked (false in forced modes)
    pub prompted: bool,
    pub members: usize,
}

/// Result of a promotion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromoteReport {
    /// Per-file outcomes in execution order
    pub entries: Vec<FileOutcome>,
    /// Per-group decisions in resolution order
    pub groups: Vec<GroupOutcome>,
    /// Number of questions put to the confirmation port
    pub prompts: usize,
    /// Directories created while mirroring the staging tree
    pub directories_created: usize,
}

impl PromoteReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, relative_path: impl Into<PathBuf>, action: FileAction) {
        self.entries.push(FileOutcome {
            relative_path: relative_path.into(),
            action,
        });
    }

    fn count(&self, action: FileAction) -> usize {
        self.entries.iter().filter(|e| e.action == action).count()
    }

    pub fn copied(&self) -> usize {
        self.count(FileAction::Copied)
    }

    pub fn overwritten(&self) -> usize {
        self.count(FileAction::Overwritten)
    }

    pub fn skipped(&self) -> usize {
        self.count(FileAction::Skipped)
    }

    /// Files that reached the archive during this run
    pub fn promoted(&self) -> usize {
        self.copied() + self.overwritten()
    }

    pub fn action_for(&self, relative_path: &str) -> Option<FileAction> {
        self.entries
            .iter()
            .find(|e| e.relative_path == std::path::Path::new(relative_path))
            .map(|e| e.action)
    }
}
