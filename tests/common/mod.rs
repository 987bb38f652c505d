//! Common test utilities for legacy-promote CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project root and config home, plus CLI helpers
//! - Fixtures: The staged build used by most scenarios

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
