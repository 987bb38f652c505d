//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod confirmation;
pub mod file_system;
pub mod promote_events;

pub use confirmation::{AlwaysOverwrite, AlwaysSkip, ConfirmationPort};
pub use file_system::{EntryKind, FileSystem, FsEntry, FsError, FsResult};
pub use promote_events::{NoopEventSink, PromoteEvent, PromoteEventSink};
