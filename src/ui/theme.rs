use crossterm::style::Color;

/// Design tokens for the legacy-promote CLI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const SKIPPED: &str = "○";
    pub const FOLDER: &str = "▸";

    // Command identifier (used in the header).
    pub const PROMOTE: &str = "📦";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const SKIPPED: &str = "[--]";
    pub const FOLDER: &str = "[DIR]";

    pub const PROMOTE: &str = "[PROMOTE]";
}
