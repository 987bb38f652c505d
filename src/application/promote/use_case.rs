//! Promote Use Case
//!
//! Orchestrates the promotion flow:
//! 1. Check the staging root, reject nested roots, and make sure the
//!    archive root exists
//! 2. Walk staging, mirroring directories and collecting candidates
//! 3. Group confirmable candidates by `(component, version)`
//! 4. Resolve each group (forced mode or operator) and apply it
//! 5. Copy the auto bucket
//!
//! Groups are resolved strictly one after another: a group's decision is
//! applied and reported before the next question is asked.

use crate::application::collector::TreeCollector;
use crate::application::executor::PromotionExecutor;
use crate::domain::policies::PromotionPolicy;
use crate::domain::ports::{ConfirmationPort, FileSystem, PromoteEvent, PromoteEventSink};
use crate::domain::services::group_candidates;
use crate::error::{PromoteError, PromoteResult};

use super::options::PromoteOptions;
use super::report::{GroupOutcome, PromoteReport};

/// Promote use case
pub struct PromoteUseCase<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    policy: PromotionPolicy,
    events: &'a dyn PromoteEventSink,
}

impl<'a, FS: FileSystem + ?Sized> PromoteUseCase<'a, FS> {
    pub fn new(fs: &'a FS, policy: PromotionPolicy, events: &'a dyn PromoteEventSink) -> Self {
        Self { fs, policy, events }
    }

    /// Run one promotion.
    ///
    /// `confirm` is only consulted when `options.mode` is `Ask`.
    pub fn execute(
        &self,
        options: &PromoteOptions,
        confirm: &mut dyn ConfirmationPort,
    ) -> PromoteResult<PromoteReport> {
        self.check_preconditions(options)?;

        let mut report = PromoteReport::new();
        if !self.fs.is_dir(&options.archive_root) {
            self.fs.create_dir_all(&options.archive_root)?;
            report.directories_created += 1;
        }

        self.events.on_event(PromoteEvent::Started {
            staging: options.staging_root.clone(),
            archive: options.archive_root.clone(),
            mode: options.mode,
        });

        let collection = TreeCollector::new(self.fs, &self.policy, self.events)
            .collect(&options.staging_root, &options.archive_root)?;
        report.directories_created += collection.directories_created;

        let candidate_count = collection.candidates.len();
        let plan = group_candidates(collection.candidates);

        self.events.on_event(PromoteEvent::Collected {
            candidates: candidate_count,
            groups: plan.groups.len(),
            auto: plan.auto.len(),
        });

        let executor = PromotionExecutor::new(self.fs, self.events);
        let forced = options.mode.forced_decision();

        for group in &plan.groups {
            let (decision, prompted) = match forced {
                Some(decision) => (decision, false),
                None => {
                    report.prompts += 1;
                    (confirm.confirm(group.component(), group.version()), true)
                }
            };

            self.events.on_event(PromoteEvent::GroupResolved {
                component: group.component().to_string(),
                version: group.version().to_string(),
                decision,
                prompted,
                members: group.len(),
            });

            executor.apply_group(group, decision, &mut report)?;

            report.groups.push(GroupOutcome {
                component: group.component().to_string(),
                version: group.version().to_string(),
                decision,
                prompted,
                members: group.len(),
            });
        }

        executor.copy_all(&plan.auto, &mut report)?;

        self.events.on_event(PromoteEvent::Completed {
            copied: report.copied(),
            overwritten: report.overwritten(),
            skipped: report.skipped(),
            prompts: report.prompts,
        });

        Ok(report)
    }

    fn check_preconditions(&self, options: &PromoteOptions) -> PromoteResult<()> {
        if !self.fs.exists(&options.staging_root) {
            return Err(PromoteError::StagingNotFound {
                path: options.staging_root.clone(),
            });
        }
        if !self.fs.is_dir(&options.staging_root) {
            return Err(PromoteError::StagingNotADirectory {
                path: options.staging_root.clone(),
            });
        }

        let staging = self.fs.canonicalize(&options.staging_root);
        let archive = self.fs.canonicalize(&options.archive_root);
        if staging.starts_with(&archive) || archive.starts_with(&staging) {
            return Err(PromoteError::OverlappingRoots {
                staging: options.staging_root.clone(),
                archive: options.archive_root.clone(),
            });
        }
        Ok(())
    }
}
