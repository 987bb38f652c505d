use std::path::Path;

use legacy_promote::config::ConfigWarning;
use legacy_promote::{OverwriteMode, PromoteReport};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_promote_header(
    staging: &Path,
    archive: &Path,
    mode: OverwriteMode,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Promote, "Legacy Promote");
    header.add("Staging", staging.display().to_string());
    header.add("Archive", archive.display().to_string());
    header.add("Mode", mode.as_str());
    header.render(supports_color, supports_unicode)
}

fn archived_releases(count: usize) -> &'static str {
    if count == 1 {
        "archived release"
    } else {
        "archived releases"
    }
}

pub fn render_promote_summary(
    report: &PromoteReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let kept = report
        .groups
        .iter()
        .filter(|g| g.decision == legacy_promote::Decision::Skip)
        .count();

    let mut summary = if kept == 0 {
        ResultSummary::success("Promotion Complete")
    } else {
        ResultSummary::partial("Promotion Results")
    };

    summary.add_stat("copied", report.copied());
    summary.add_stat("overwritten", report.overwritten());
    summary.add_stat("skipped", report.skipped());
    if !report.groups.is_empty() {
        let resolved = report.groups.len();
        summary.add_stat(format!("{} resolved", archived_releases(resolved)), resolved);
    }

    if kept > 0 {
        summary.add_warning(format!("{kept} {} left untouched", archived_releases(kept)));
        summary.with_next_step(if kept == 1 {
            "Re-run with --overwrite to replace it"
        } else {
            "Re-run with --overwrite to replace them"
        });
    }

    summary.render(supports_color, supports_unicode)
}

pub fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut out = format!(
        "{} unknown config key '{}' in {}",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning(warning.key.as_str()).render(supports_color),
        location
    );
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!(" (did you mean '{suggestion}'?)"));
    }
    out
}
