//! Decisions and run modes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Resolution applied to every member of a version group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Copy over whatever is already archived
    Overwrite,
    /// Leave the archived copy untouched
    Skip,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Overwrite => "overwrite",
            Decision::Skip => "skip",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How confirmable groups are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwriteMode {
    /// Ask the operator once per group
    #[default]
    Ask,
    /// Overwrite every group without asking
    Overwrite,
    /// Skip every group without asking
    Skip,
}

impl OverwriteMode {
    /// Map `--overwrite=<bool>` / `--ask` to a mode. `None` means the flag was absent.
    pub fn from_flags(overwrite: Option<bool>, ask: bool) -> Option<Self> {
        if ask {
            return Some(OverwriteMode::Ask);
        }
        overwrite.map(|force| {
            if force {
                OverwriteMode::Overwrite
            } else {
                OverwriteMode::Skip
            }
        })
    }

    /// The decision substituted for every group, or `None` when the operator is asked.
    pub fn forced_decision(self) -> Option<Decision> {
        match self {
            OverwriteMode::Ask => None,
            OverwriteMode::Overwrite => Some(Decision::Overwrite),
            OverwriteMode::Skip => Some(Decision::Skip),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OverwriteMode::Ask => "ask",
            OverwriteMode::Overwrite => "overwrite",
            OverwriteMode::Skip => "skip",
        }
    }
}

impl fmt::Display for OverwriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverwriteMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ask" | "interactive" => Ok(OverwriteMode::Ask),
            "overwrite" | "true" | "force" => Ok(OverwriteMode::Overwrite),
            "skip" | "false" => Ok(OverwriteMode::Skip),
            other => Err(format!(
                "unknown overwrite mode '{other}' (expected ask, overwrite or skip)"
            )),
        }
    }
}
