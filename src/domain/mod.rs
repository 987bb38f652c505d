//! Domain Layer
//!
//! Pure classification and grouping logic for artifact promotion.
//!
//! ## Structure
//!
//! - `value_objects/` - Version marker matching, decisions, run modes
//! - `entities/` - File candidates and version groups
//! - `policies/` - Promotion rules (what gets archived, what needs asking)
//! - `services/` - Conflict grouping
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or a terminal directly
//! 2. **Pure Functions** - Policies and services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
