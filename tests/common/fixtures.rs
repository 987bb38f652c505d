//! Reusable staging layouts.

use super::TestEnv;

pub const WIDGET_JS: &str = "widget-1.0.0.js";
pub const WIDGET_MAP: &str = "widget-1.0.0.js.map";

/// The canonical build: one versioned release with its map, the unversioned
/// latest bundle, a config file, and a nested asset.
pub fn stage_widget_build(env: &TestEnv) {
    env.stage(WIDGET_JS, "widget v1 rebuilt");
    env.stage(WIDGET_MAP, "{\"version\":3}");
    env.stage("widget.js", "widget latest");
    env.stage("api.json", "{\"api\":2}");
    env.stage("images/logo.png", "PNG");
}
