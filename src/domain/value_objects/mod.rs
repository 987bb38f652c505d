//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod decision;
pub mod version;

pub use decision::{Decision, OverwriteMode};
pub use version::GroupKey;
