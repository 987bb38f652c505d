//! Domain Services
//!
//! Stateless logic operating on collected candidates.

mod grouper;

pub use grouper::{group_candidates, GroupingPlan};
