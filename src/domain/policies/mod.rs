//! Domain Policies
//!
//! Business rules for deciding which staged files reach the archive.

mod promotion;

pub use promotion::{PromotionClass, PromotionPolicy};
