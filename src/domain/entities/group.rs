//! Version Group Entity

use crate::domain::entities::FileCandidate;
use crate::domain::value_objects::GroupKey;

/// All candidates sharing one `(component, version)` key.
///
/// A decision taken for the group applies to every member; there is no
/// way to resolve members individually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionGroup {
    key: GroupKey,
    members: Vec<FileCandidate>,
}

impl VersionGroup {
    pub fn new(key: GroupKey) -> Self {
        Self {
            key,
            members: Vec::new(),
        }
    }

    pub fn push(&mut self, candidate: FileCandidate) {
        self.members.push(candidate);
    }

    pub fn key(&self) -> &GroupKey {
        &self.key
    }

    pub fn component(&self) -> &str {
        &self.key.component
    }

    pub fn version(&self) -> &str {
        &self.key.version
    }

    /// Members in insertion order
    pub fn members(&self) -> &[FileCandidate] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
