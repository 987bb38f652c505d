//! Conflict grouping service
//!
//! Partitions collected candidates so that every file of one release is
//! confirmed exactly once. The partition is total and disjoint: each
//! candidate ends up either in one `VersionGroup` or in the auto bucket.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::{FileCandidate, VersionGroup};
use crate::domain::value_objects::GroupKey;

/// Result of grouping: confirmable groups plus the unconditional bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingPlan {
    /// Groups in order of first appearance
    pub groups: Vec<VersionGroup>,
    /// Candidates copied without asking
    pub auto: Vec<FileCandidate>,
    /// Needs-confirmation candidates without a version, folded into `auto`
    pub ungrouped: usize,
}

impl GroupingPlan {
    /// Total number of candidates across groups and the auto bucket
    pub fn candidate_count(&self) -> usize {
        self.groups.iter().map(VersionGroup::len).sum::<usize>() + self.auto.len()
    }
}

/// Split candidates by their frozen `requires_confirmation` flag and key the
/// confirmable ones by `(component, version)`.
///
/// A release is confirmed as one unit: release files that are new to the
/// archive join the group of an already-archived sibling and follow its
/// decision. Release files of a version nobody asks about stay in `auto`.
pub fn group_candidates(candidates: Vec<FileCandidate>) -> GroupingPlan {
    let confirmable: HashSet<GroupKey> = candidates
        .iter()
        .filter(|c| c.requires_confirmation())
        .filter_map(|c| GroupKey::for_file_name(c.file_name()))
        .collect();

    let mut plan = GroupingPlan::default();
    let mut index: HashMap<GroupKey, usize> = HashMap::new();

    for candidate in candidates {
        let key = if candidate.requires_confirmation() || candidate.is_release_file() {
            GroupKey::for_file_name(candidate.file_name())
                .filter(|key| confirmable.contains(key))
        } else {
            None
        };

        let Some(key) = key else {
            if candidate.requires_confirmation() {
                // No version identity to confirm against
                plan.ungrouped += 1;
            }
            plan.auto.push(candidate);
            continue;
        };

        let slot = *index.entry(key.clone()).or_insert_with(|| {
            plan.groups.push(VersionGroup::new(key));
            plan.groups.len() - 1
        });
        plan.groups[slot].push(candidate);
    }

    plan
}
