//! Version Marker Matching
//!
//! Recognizes release-specific artifact names of the form
//! `<component>-<major>.<minor>.<patch>.<rest>` (e.g. `widget-2.10.3.js`)
//! and their companion source maps (`widget-2.10.3.js.map`).
//!
//! Absence of a marker is a normal outcome, never an error.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Suffix appended to a compiled artifact to name its source map.
pub const MAP_SUFFIX: &str = ".map";

/// Component label used when a file name has no hyphen at all.
pub const UNKNOWN_COMPONENT: &str = "unknown";

/// Hyphen, three dot-separated ASCII-digit components, trailing dot.
static VERSION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-([0-9]+\.[0-9]+\.[0-9]+)\.").expect("version marker regex is valid")
});

/// True iff the name contains a `-<digits>.<digits>.<digits>.` substring.
pub fn has_version_marker(file_name: &str) -> bool {
    VERSION_MARKER.is_match(file_name)
}

/// True iff the name is a source map whose stripped name carries a version marker.
pub fn is_map_of_versioned(file_name: &str) -> bool {
    strip_map_suffix(file_name).is_some_and(has_version_marker)
}

/// Returns the name without the map suffix, or `None` if it is not a map file.
pub fn strip_map_suffix(file_name: &str) -> Option<&str> {
    file_name.strip_suffix(MAP_SUFFIX)
}

/// Extract the `major.minor.patch` triple from the first version marker in the name.
pub fn extract_version(file_name: &str) -> Option<&str> {
    VERSION_MARKER
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Text before the first hyphen, or [`UNKNOWN_COMPONENT`] if there is none.
///
/// This is a heuristic: `my-plugin-1.0.0.js` yields `my`.
pub fn extract_component_name(file_name: &str) -> &str {
    match file_name.split_once('-') {
        Some((component, _)) => component,
        None => UNKNOWN_COMPONENT,
    }
}

/// Identity of one release: the unit an operator confirms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub component: String,
    pub version: String,
}

impl GroupKey {
    pub fn new(component: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            version: version.into(),
        }
    }

    /// Key for a versioned name, falling back to the map-stripped base name.
    pub fn for_file_name(file_name: &str) -> Option<Self> {
        let base = if has_version_marker(file_name) {
            file_name
        } else {
            strip_map_suffix(file_name).filter(|base| has_version_marker(base))?
        };

        let version = extract_version(base)?;
        Some(Self::new(extract_component_name(base), version))
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.component, self.version)
    }
}
