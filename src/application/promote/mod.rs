//! Promote Module
//!
//! Orchestrates one promotion run from staging into the archive.
//!
//! ## Structure
//!
//! - `options` - Run configuration (`PromoteOptions`)
//! - `report` - Session log (`PromoteReport`)
//! - `use_case` - Core orchestration (`PromoteUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use legacy_promote::application::promote::{PromoteOptions, PromoteUseCase};
//!
//! let use_case = PromoteUseCase::new(&fs, policy, &events);
//! let report = use_case.execute(&PromoteOptions::new(staging, archive), &mut confirm)?;
//! ```

mod options;
mod report;
mod use_case;

pub use options::PromoteOptions;
pub use report::{FileAction, FileOutcome, GroupOutcome, PromoteReport};
pub use use_case::PromoteUseCase;
