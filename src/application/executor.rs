//! Promotion Executor
//!
//! Applies resolved decisions by copying files into the archive. Every file
//! operation is reported; the first copy failure aborts the run and files
//! copied before it stay in place.

use crate::application::promote::{FileAction, PromoteReport};
use crate::domain::entities::{FileCandidate, VersionGroup};
use crate::domain::ports::{FileSystem, PromoteEvent, PromoteEventSink};
use crate::domain::value_objects::Decision;
use crate::error::PromoteResult;

pub struct PromotionExecutor<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    events: &'a dyn PromoteEventSink,
}

impl<'a, FS: FileSystem + ?Sized> PromotionExecutor<'a, FS> {
    pub fn new(fs: &'a FS, events: &'a dyn PromoteEventSink) -> Self {
        Self { fs, events }
    }

    /// Apply one decision to every member of a group.
    pub fn apply_group(
        &self,
        group: &VersionGroup,
        decision: Decision,
        report: &mut PromoteReport,
    ) -> PromoteResult<()> {
        for member in group.members() {
            match decision {
                Decision::Overwrite => self.copy(member, report)?,
                Decision::Skip => self.skip(member, report),
            }
        }
        Ok(())
    }

    /// Copy every auto-resolved candidate, converging the archive to staging.
    pub fn copy_all(
        &self,
        candidates: &[FileCandidate],
        report: &mut PromoteReport,
    ) -> PromoteResult<()> {
        for candidate in candidates {
            self.copy(candidate, report)?;
        }
        Ok(())
    }

    fn copy(&self, candidate: &FileCandidate, report: &mut PromoteReport) -> PromoteResult<()> {
        self.fs.copy(candidate.source(), candidate.destination())?;

        let relative_path = candidate.relative_path().to_path_buf();
        let (action, event) = if candidate.exists_at_destination() {
            (
                FileAction::Overwritten,
                PromoteEvent::FileOverwritten {
                    relative_path: relative_path.clone(),
                },
            )
        } else {
            (
                FileAction::Copied,
                PromoteEvent::FileCopied {
                    relative_path: relative_path.clone(),
                },
            )
        };

        report.record(relative_path, action);
        self.emit(event);
        Ok(())
    }

    fn skip(&self, candidate: &FileCandidate, report: &mut PromoteReport) {
        let relative_path = candidate.relative_path().to_path_buf();
        report.record(relative_path.clone(), FileAction::Skipped);
        self.emit(PromoteEvent::FileSkipped { relative_path });
    }

    fn emit(&self, event: PromoteEvent) {
        if self.events.wants_detailed_events() {
            self.events.on_event(event);
        }
    }
}
