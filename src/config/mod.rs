//! Configuration module for legacy-promote
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (LEGACY_PROMOTE_*)
//! 3. Explicit file (`--config`)
//! 4. Project config (`<root>/legacy-promote.toml`)
//! 5. User config (`<config_dir>/legacy-promote/config.toml`)
//! 6. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
pub use types::{
    ColorMode, Config, OutputConfig, PathsConfig, PolicyConfig, PromoteConfig, PromptConfig,
};
