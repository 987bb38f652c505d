//! Promote Event Port
//!
//! Provides an observable interface for promotion runs.
//! Enables console progress, NDJSON event streams, and test recording.

use std::path::PathBuf;

use crate::domain::value_objects::{Decision, OverwriteMode};

/// Event emitted during a promotion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromoteEvent {
    /// Run started
    Started {
        staging: PathBuf,
        archive: PathBuf,
        mode: OverwriteMode,
    },

    /// A directory was mirrored into the archive
    DirectoryCreated { relative_path: PathBuf },

    /// Tree walk finished
    Collected {
        candidates: usize,
        groups: usize,
        auto: usize,
    },

    /// A version group received its decision
    GroupResolved {
        component: String,
        version: String,
        decision: Decision,
        prompted: bool,
        members: usize,
    },

    /// File copied to a fresh destination
    FileCopied { relative_path: PathBuf },

    /// File copied over an existing archived file
    FileOverwritten { relative_path: PathBuf },

    /// File left untouched because its group was skipped
    FileSkipped { relative_path: PathBuf },

    /// Run completed
    Completed {
        copied: usize,
        overwritten: usize,
        skipped: usize,
        prompts: usize,
    },
}

/// Trait for receiving promote events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait PromoteEventSink {
    /// Handle a promote event
    fn on_event(&self, event: PromoteEvent);

    /// Check if this sink wants per-file and per-directory events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PromoteEventSink for NoopEventSink {
    fn on_event(&self, _event: PromoteEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
