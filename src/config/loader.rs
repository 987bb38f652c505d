//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::OverwriteMode;
use crate::error::{PromoteError, PromoteResult};

use super::types::Config;

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "legacy-promote.toml";

/// User config path below the platform config directory
pub const USER_CONFIG_FILE: &str = "legacy-promote/config.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PromoteResult<(Config, Vec<ConfigWarning>)> {
    let invalid = |message: String| PromoteError::InvalidConfig {
        file: path.to_path_buf(),
        message,
    };

    let content = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| invalid(e.to_string()))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the explicit, project, or user config (first one found), or defaults,
/// and apply environment overrides.
pub fn load_or_default(
    project_root: &Path,
    explicit: Option<&Path>,
) -> PromoteResult<(Config, Vec<ConfigWarning>)> {
    let user_config = dirs::config_dir().map(|dir| dir.join(USER_CONFIG_FILE));
    let (config, warnings) = load_first(project_root, explicit, user_config.as_deref())?;
    Ok((with_env_overrides(config), warnings))
}

/// File lookup without environment overrides.
///
/// An explicit path must exist; implicit files are only read when present.
pub fn load_first(
    project_root: &Path,
    explicit: Option<&Path>,
    user_config: Option<&Path>,
) -> PromoteResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        return load_with_warnings(path);
    }

    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        return load_with_warnings(&project_config);
    }

    if let Some(path) = user_config.filter(|p| p.is_file()) {
        return load_with_warnings(path);
    }

    Ok((Config::default(), Vec::new()))
}

/// Apply environment variable overrides (LEGACY_PROMOTE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `get_env`. Unparseable values are ignored.
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(mode) = get_env("LEGACY_PROMOTE_MODE") {
        if let Ok(mode) = mode.parse::<OverwriteMode>() {
            config.promote.mode = mode;
        }
    }

    if let Some(staging) = get_env("LEGACY_PROMOTE_STAGING").filter(|v| !v.is_empty()) {
        config.paths.staging = PathBuf::from(staging);
    }

    if let Some(archive) = get_env("LEGACY_PROMOTE_ARCHIVE").filter(|v| !v.is_empty()) {
        config.paths.archive = PathBuf::from(archive);
    }

    if let Some(val) = get_env("LEGACY_PROMOTE_ATOMIC_COPIES") {
        config.promote.atomic_copies = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "staging",
        "archive",
        "promote",
        "mode",
        "atomic_copies",
        "policy",
        "config_files",
        "manifest_marker",
        "prompt",
        "affirmative",
        "output",
        "color",
        "unicode",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
