//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::PromoteOptions;
use crate::domain::policies::PromotionPolicy;
use crate::domain::value_objects::OverwriteMode;
use crate::error::PromoteResult;

use super::loader::{self, ConfigWarning};

/// Staging and archive locations, relative to the project root unless absolute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_staging")]
    pub staging: PathBuf,

    #[serde(default = "default_archive")]
    pub archive: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            staging: default_staging(),
            archive: default_archive(),
        }
    }
}

fn default_staging() -> PathBuf {
    PathBuf::from("dist")
}

fn default_archive() -> PathBuf {
    PathBuf::from("legacy")
}

/// Promotion run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoteConfig {
    #[serde(default)]
    pub mode: OverwriteMode,

    #[serde(default = "default_true")]
    pub atomic_copies: bool,
}

impl Default for PromoteConfig {
    fn default() -> Self {
        Self {
            mode: OverwriteMode::default(),
            atomic_copies: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Vocabulary of the promotion policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default = "default_config_files")]
    pub config_files: Vec<String>,

    #[serde(default = "default_manifest_marker")]
    pub manifest_marker: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            config_files: default_config_files(),
            manifest_marker: default_manifest_marker(),
        }
    }
}

fn default_config_files() -> Vec<String> {
    vec!["api.json".to_string()]
}

fn default_manifest_marker() -> String {
    "package".to_string()
}

/// Interactive prompt configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Answers (case-insensitive) that mean "overwrite"
    #[serde(default = "default_affirmative")]
    pub affirmative: Vec<String>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            affirmative: default_affirmative(),
        }
    }
}

fn default_affirmative() -> Vec<String> {
    vec!["y".to_string(), "yes".to_string()]
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub promote: PromoteConfig,

    #[serde(default)]
    pub policy: PolicyConfig,

    #[serde(default)]
    pub prompt: PromptConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PromoteResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the first config file found for `project_root`, then apply env overrides
    pub fn load_or_default(
        project_root: &Path,
        explicit: Option<&Path>,
    ) -> PromoteResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root, explicit)
    }

    /// Promotion policy built from `[policy]`
    pub fn policy(&self) -> PromotionPolicy {
        PromotionPolicy::new(
            self.policy.config_files.clone(),
            self.policy.manifest_marker.clone(),
        )
    }

    /// Resolve `[paths]` against `project_root` and take the configured mode.
    pub fn promote_options(&self, project_root: &Path) -> PromoteOptions {
        PromoteOptions::new(
            project_root.join(&self.paths.staging),
            project_root.join(&self.paths.archive),
        )
        .with_mode(self.promote.mode)
    }
}
