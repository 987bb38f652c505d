//! Infrastructure implementations for ConfirmationPort
//!
//! This module provides the interactive implementation of the `ConfirmationPort` trait.

mod interactive;

pub use interactive::{AnswerSource, InteractiveConfirmation};
