//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `conflict/` - Operator prompt for re-promoted releases
//! - `events/` - NDJSON event stream

pub mod conflict;
pub mod events;
pub mod fs;

// Re-export for convenience
pub use conflict::{AnswerSource, InteractiveConfirmation};
pub use events::JsonEventSink;
pub use fs::LocalFs;
