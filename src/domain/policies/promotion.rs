//! Promotion Policy
//!
//! Decides, from a file name and its path relative to the staging root,
//! whether a file is archived and whether overwriting it needs an operator.
//! This is a pure policy - it never touches the file system.

use std::path::Path;

use crate::domain::value_objects::version::{has_version_marker, is_map_of_versioned};

/// Why a file qualifies for promotion (rules are checked in this order).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionClass {
    /// Name carries a `-major.minor.patch.` marker
    Versioned,
    /// Source map of a versioned artifact
    VersionedMap,
    /// Well-known configuration file or non-manifest JSON
    Config,
    /// Anything below a staging subdirectory (static assets)
    NestedAsset,
}

/// Promotion rules with their configurable vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionPolicy {
    config_files: Vec<String>,
    manifest_marker: String,
}

impl Default for PromotionPolicy {
    fn default() -> Self {
        Self {
            config_files: vec!["api.json".to_string()],
            manifest_marker: "package".to_string(),
        }
    }
}

impl PromotionPolicy {
    pub fn new(config_files: Vec<String>, manifest_marker: impl Into<String>) -> Self {
        Self {
            config_files,
            manifest_marker: manifest_marker.into(),
        }
    }

    /// Exact well-known name, or `.json` whose name does not look like a package manifest.
    pub fn is_config_file(&self, file_name: &str) -> bool {
        if self.config_files.iter().any(|name| name == file_name) {
            return true;
        }
        file_name.ends_with(".json")
            && (self.manifest_marker.is_empty() || !file_name.contains(&self.manifest_marker))
    }

    /// True when the file sits below a subdirectory of the staging root.
    pub fn is_nested(relative_path: &Path) -> bool {
        relative_path
            .parent()
            .is_some_and(|parent| !parent.as_os_str().is_empty())
    }

    /// First matching rule, or `None` for root-level build noise.
    pub fn classify(&self, file_name: &str, relative_path: &Path) -> Option<PromotionClass> {
        if has_version_marker(file_name) {
            Some(PromotionClass::Versioned)
        } else if is_map_of_versioned(file_name) {
            Some(PromotionClass::VersionedMap)
        } else if self.is_config_file(file_name) {
            Some(PromotionClass::Config)
        } else if Self::is_nested(relative_path) {
            Some(PromotionClass::NestedAsset)
        } else {
            None
        }
    }

    pub fn should_promote(&self, file_name: &str, relative_path: &Path) -> bool {
        self.classify(file_name, relative_path).is_some()
    }

    /// Promoted files that are never overwritten silently: root-level
    /// versioned artifacts and their maps.
    pub fn is_release_file(&self, file_name: &str, relative_path: &Path) -> bool {
        if self.is_config_file(file_name) || Self::is_nested(relative_path) {
            return false;
        }
        self.should_promote(file_name, relative_path)
    }

    /// Only an already-archived versioned artifact (or its map) needs an operator.
    pub fn requires_confirmation(
        &self,
        file_name: &str,
        relative_path: &Path,
        exists_at_destination: bool,
    ) -> bool {
        exists_at_destination && self.is_release_file(file_name, relative_path)
    }
}
