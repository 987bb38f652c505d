//! Console event sink: one line per file operation and resolved release.

use std::cell::RefCell;
use std::io::{self, Write};

use legacy_promote::domain::ports::{PromoteEvent, PromoteEventSink};
use legacy_promote::domain::value_objects::Decision;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::promote::render_promote_header;

pub struct ConsoleEventSink<W: Write = io::Stdout> {
    ui: UiContext,
    out: RefCell<W>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stdout())
    }
}

impl<W: Write> ConsoleEventSink<W> {
    pub fn with_writer(ui: UiContext, out: W) -> Self {
        Self {
            ui,
            out: RefCell::new(out),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> PromoteEventSink for ConsoleEventSink<W> {
    fn on_event(&self, event: PromoteEvent) {
        if let Some(line) = format_event(&event, &self.ui) {
            let mut out = self.out.borrow_mut();
            let _ = writeln!(out, "{line}");
            let _ = out.flush();
        }
    }
}

/// Render one event, or `None` when it is not shown at this verbosity.
///
/// `Started` renders the run header once the roots have been checked;
/// `Completed` is left to the command's summary.
pub fn format_event(event: &PromoteEvent, ui: &UiContext) -> Option<String> {
    let (color, unicode) = (ui.color, ui.unicode);

    match event {
        PromoteEvent::Started {
            staging,
            archive,
            mode,
        } => Some(
            render_promote_header(staging, archive, *mode, color, unicode)
                .trim_end()
                .to_string(),
        ),

        PromoteEvent::Completed { .. } => None,

        PromoteEvent::DirectoryCreated { relative_path } => (ui.verbose > 0).then(|| {
            format!(
                "  {} {}",
                Icon::Folder.colored(color, unicode),
                ColoredText::dim(format!("created {}", relative_path.display())).render(color)
            )
        }),

        PromoteEvent::Collected {
            candidates,
            groups,
            auto,
        } => (ui.verbose > 0).then(|| {
            ColoredText::dim(format!(
                "Collected {candidates} files: {groups} archived releases to resolve, {auto} to copy"
            ))
            .render(color)
        }),

        PromoteEvent::GroupResolved {
            component,
            version,
            decision,
            members,
            ..
        } => {
            let verdict = match decision {
                Decision::Overwrite => ColoredText::warning("overwrite"),
                Decision::Skip => ColoredText::dim("keep archived"),
            };
            Some(format!(
                "{} {component}-{version}: {} ({members} files)",
                Icon::Arrow.colored(color, unicode),
                verdict.render(color)
            ))
        }

        PromoteEvent::FileCopied { relative_path } => Some(format!(
            "  {} {} {}",
            Icon::Success.colored(color, unicode),
            ColoredText::success("copied     ").render(color),
            relative_path.display()
        )),

        PromoteEvent::FileOverwritten { relative_path } => Some(format!(
            "  {} {} {}",
            Icon::Success.colored(color, unicode),
            ColoredText::warning("overwritten").render(color),
            relative_path.display()
        )),

        PromoteEvent::FileSkipped { relative_path } => Some(format!(
            "  {} {} {}",
            Icon::Skipped.colored(color, unicode),
            ColoredText::dim("skipped    ").render(color),
            relative_path.display()
        )),
    }
}
