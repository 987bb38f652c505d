//! Application Layer
//!
//! Use cases that orchestrate the promotion flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain promotion rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PromoteUseCase` - Walk staging, group conflicts, confirm, copy
//!
//! ## Services
//!
//! - `TreeCollector` - Single-pass staging walk that mirrors directories
//! - `PromotionExecutor` - Applies decisions and reports every file operation

pub mod collector;
pub mod executor;
pub mod promote;

pub use collector::{Collection, TreeCollector};
pub use executor::PromotionExecutor;
pub use promote::{
    FileAction, FileOutcome, GroupOutcome, PromoteOptions, PromoteReport, PromoteUseCase,
};
