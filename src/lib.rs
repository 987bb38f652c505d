//! legacy-promote - archive versioned build artifacts
//!
//! Promotes freshly built artifacts from a staging directory (`dist`) into a
//! long-lived archive (`legacy`). Versioned artifacts that are already
//! archived are confirmed once per release; configuration files and nested
//! assets always converge to the staging copy.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{PromoteOptions, PromoteReport, PromoteUseCase};
pub use config::Config;
pub use domain::policies::PromotionPolicy;
pub use domain::ports::{ConfirmationPort, PromoteEvent, PromoteEventSink};
pub use domain::value_objects::{Decision, OverwriteMode};
pub use error::{PromoteError, PromoteResult};
pub use infrastructure::{InteractiveConfirmation, JsonEventSink, LocalFs};
