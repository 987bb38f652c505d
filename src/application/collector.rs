//! Tree Collector
//!
//! Walks the staging tree depth-first, mirrors every directory into the
//! archive, and returns the files the promotion policy accepts.

use std::path::{Path, PathBuf};

use crate::domain::entities::FileCandidate;
use crate::domain::policies::PromotionPolicy;
use crate::domain::ports::{EntryKind, FileSystem, PromoteEvent, PromoteEventSink};
use crate::error::PromoteResult;

/// Output of one walk
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub candidates: Vec<FileCandidate>,
    pub directories_created: usize,
}

/// Single-pass collector over a staging tree.
pub struct TreeCollector<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    policy: &'a PromotionPolicy,
    events: &'a dyn PromoteEventSink,
}

impl<'a, FS: FileSystem + ?Sized> TreeCollector<'a, FS> {
    pub fn new(
        fs: &'a FS,
        policy: &'a PromotionPolicy,
        events: &'a dyn PromoteEventSink,
    ) -> Self {
        Self { fs, policy, events }
    }

    /// Walk `staging` and mirror its directories under `archive`.
    ///
    /// Both roots must already exist.
    pub fn collect(&self, staging: &Path, archive: &Path) -> PromoteResult<Collection> {
        let mut collection = Collection::default();
        self.walk(staging, archive, Path::new(""), &mut collection)?;
        Ok(collection)
    }

    fn walk(
        &self,
        staging: &Path,
        archive: &Path,
        relative_dir: &Path,
        out: &mut Collection,
    ) -> PromoteResult<()> {
        for entry in self.fs.read_dir(&staging.join(relative_dir))? {
            let relative: PathBuf = relative_dir.join(&entry.name);
            let destination = archive.join(&relative);

            match entry.kind {
                EntryKind::Directory => {
                    if !self.fs.is_dir(&destination) {
                        self.fs.create_dir_all(&destination)?;
                        out.directories_created += 1;
                        if self.events.wants_detailed_events() {
                            self.events.on_event(PromoteEvent::DirectoryCreated {
                                relative_path: relative.clone(),
                            });
                        }
                    }
                    self.walk(staging, archive, &relative, out)?;
                }
                EntryKind::File => {
                    if !self.policy.should_promote(&entry.name, &relative) {
                        continue;
                    }

                    let exists = self.fs.exists(&destination);
                    let requires =
                        self.policy
                            .requires_confirmation(&entry.name, &relative, exists);
                    let release = self.policy.is_release_file(&entry.name, &relative);

                    out.candidates.push(
                        FileCandidate::new(entry.path, destination, relative, entry.name)
                            .with_exists_at_destination(exists)
                            .with_requires_confirmation(requires)
                            .with_release_file(release),
                    );
                }
                EntryKind::Other => {}
            }
        }

        Ok(())
    }
}
