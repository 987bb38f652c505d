//! Domain Entities
//!
//! - `FileCandidate` - one promotable file found under the staging root
//! - `VersionGroup` - every candidate of one release, confirmed as a unit

mod candidate;
mod group;

pub use candidate::FileCandidate;
pub use group::VersionGroup;
