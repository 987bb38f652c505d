//! JSON Event Sink
//!
//! Outputs promote events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::domain::ports::{PromoteEvent, PromoteEventSink};

const COMMAND: &str = "promote";

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Emit an `error` event (used by the binary when a run aborts)
    pub fn emit_error(&self, message: &str) {
        self.write_event(serde_json::json!({
            "event": "error",
            "command": COMMAND,
            "message": message,
        }));
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn path_str(path: &Path) -> String {
    path.display().to_string()
}

impl PromoteEventSink for JsonEventSink {
    fn on_event(&self, event: PromoteEvent) {
        let json = match event {
            PromoteEvent::Started {
                staging,
                archive,
                mode,
            } => serde_json::json!({
                "event": "start",
                "command": COMMAND,
                "version": env!("CARGO_PKG_VERSION"),
                "staging": path_str(&staging),
                "archive": path_str(&archive),
                "mode": mode.as_str(),
            }),

            PromoteEvent::DirectoryCreated { relative_path } => serde_json::json!({
                "event": "directory_created",
                "command": COMMAND,
                "path": path_str(&relative_path),
            }),

            PromoteEvent::Collected {
                candidates,
                groups,
                auto,
            } => serde_json::json!({
                "event": "collected",
                "command": COMMAND,
                "candidates": candidates,
                "groups": groups,
                "auto": auto,
            }),

            PromoteEvent::GroupResolved {
                component,
                version,
                decision,
                prompted,
                members,
            } => serde_json::json!({
                "event": "group_resolved",
                "command": COMMAND,
                "component": component,
                "version": version,
                "decision": decision.as_str(),
                "prompted": prompted,
                "members": members,
            }),

            PromoteEvent::FileCopied { relative_path } => serde_json::json!({
                "event": "item_copied",
                "command": COMMAND,
                "path": path_str(&relative_path),
            }),

            PromoteEvent::FileOverwritten { relative_path } => serde_json::json!({
                "event": "item_overwritten",
                "command": COMMAND,
                "path": path_str(&relative_path),
            }),

            PromoteEvent::FileSkipped { relative_path } => serde_json::json!({
                "event": "item_skipped",
                "command": COMMAND,
                "path": path_str(&relative_path),
            }),

            PromoteEvent::Completed {
                copied,
                overwritten,
                skipped,
                prompts,
            } => serde_json::json!({
                "event": "complete",
                "command": COMMAND,
                "success": true,
                "copied": copied,
                "overwritten": overwritten,
                "skipped": skipped,
                "prompts": prompts,
            }),
        };

        self.write_event(json);
    }
}
